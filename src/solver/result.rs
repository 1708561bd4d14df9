//! Search result record
//!
//! Packages the goal path and the search statistics for the reporting layer.

use super::tree::{NodeId, SearchTree};
use crate::core::{Board, Move};
use std::time::Duration;

/// Outcome of a successful search
///
/// `running_time` and `max_ram_usage` are left empty by the engine and filled in
/// by whoever measures the call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub path_to_goal: Vec<Move>,
    pub cost_of_path: usize,
    pub nodes_expanded: usize,
    pub search_depth: usize,
    pub max_search_depth: usize,
    pub running_time: Option<Duration>,
    /// Megabytes
    pub max_ram_usage: Option<f64>,
}

impl SearchResult {
    /// Build the result for a goal node
    #[must_use]
    pub fn from_goal(
        tree: &SearchTree,
        goal: NodeId,
        nodes_expanded: usize,
        max_search_depth: usize,
    ) -> Self {
        let path_to_goal = tree.path_to(goal);
        Self {
            cost_of_path: path_to_goal.len(),
            path_to_goal,
            nodes_expanded,
            search_depth: tree.get(goal).depth,
            max_search_depth,
            running_time: None,
            max_ram_usage: None,
        }
    }

    /// Attach externally sampled time and memory figures
    #[must_use]
    pub fn with_measurements(mut self, running_time: Duration, max_ram_usage: f64) -> Self {
        self.running_time = Some(running_time);
        self.max_ram_usage = Some(max_ram_usage);
        self
    }

    /// Play the path from `start`, returning the final board
    ///
    /// Returns `None` if any move in the path is illegal.
    #[must_use]
    pub fn replay(&self, start: &Board) -> Option<Board> {
        self.path_to_goal
            .iter()
            .try_fold(start.clone(), |board, &mv| board.apply(mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_goal_collects_path_and_depth() {
        let start = Board::new(&[1, 0, 2, 3]).unwrap();
        let mut tree = SearchTree::new();
        let root = tree.add_root(start.clone());
        let goal = tree.add_child(root, Move::Left, start.apply(Move::Left).unwrap());

        let result = SearchResult::from_goal(&tree, goal, 1, 2);
        assert_eq!(result.path_to_goal, vec![Move::Left]);
        assert_eq!(result.cost_of_path, 1);
        assert_eq!(result.search_depth, 1);
        assert_eq!(result.max_search_depth, 2);
        assert_eq!(result.running_time, None);
        assert!(result.replay(&start).unwrap().is_goal());
    }

    #[test]
    fn replay_rejects_illegal_moves() {
        let start = Board::goal(2).unwrap();
        let mut tree = SearchTree::new();
        let root = tree.add_root(start.clone());
        let result = SearchResult {
            path_to_goal: vec![Move::Up],
            ..SearchResult::from_goal(&tree, root, 0, 0)
        };
        assert!(result.replay(&start).is_none());
    }

    #[test]
    fn measurements_are_attached() {
        let mut tree = SearchTree::new();
        let root = tree.add_root(Board::goal(3).unwrap());
        let result = SearchResult::from_goal(&tree, root, 0, 0)
            .with_measurements(Duration::from_millis(5), 1.5);
        assert_eq!(result.running_time, Some(Duration::from_millis(5)));
        assert_eq!(result.max_ram_usage, Some(1.5));
    }
}
