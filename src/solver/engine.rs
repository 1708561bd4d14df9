//! Generic search driver
//!
//! One remove-check-expand loop shared by every strategy; the frontier decides
//! the traversal order.

use super::explored::ExploredSet;
use super::frontier::{Frontier, Pending};
use super::heuristic::manhattan_distance;
use super::result::SearchResult;
use super::tree::SearchTree;
use crate::core::Board;
use std::fmt;

/// Tuning knobs for a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after this many expansions
    pub node_limit: Option<usize>,
}

impl SearchConfig {
    #[must_use]
    pub const fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
        }
    }
}

/// Reasons a search does not produce a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    UnsupportedStrategy(String),
    NoSolutionFound {
        nodes_expanded: usize,
        max_search_depth: usize,
    },
    NodeLimitReached {
        limit: usize,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedStrategy(name) => {
                write!(f, "Unsupported strategy '{name}' (expected bfs, dfs or ast)")
            }
            Self::NoSolutionFound {
                nodes_expanded,
                max_search_depth,
            } => write!(
                f,
                "No solution found after expanding {nodes_expanded} nodes (max depth {max_search_depth})"
            ),
            Self::NodeLimitReached { limit } => {
                write!(f, "Search stopped after reaching the limit of {limit} expanded nodes")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Run a search from `initial` using the traversal order of `frontier`
///
/// # Errors
///
/// Returns `SearchError::NoSolutionFound` if the frontier empties without reaching
/// the goal, or `SearchError::NodeLimitReached` if `config.node_limit` is hit first.
pub fn search<F: Frontier>(
    initial: &Board,
    mut frontier: F,
    config: &SearchConfig,
) -> Result<SearchResult, SearchError> {
    let mut tree = SearchTree::new();
    let mut explored = ExploredSet::new();
    let mut nodes_expanded = 0;
    let mut max_search_depth = 0;

    log::debug!(
        "Initial board ({}x{}), manhattan distance {}",
        initial.dimension(),
        initial.dimension(),
        manhattan_distance(initial)
    );

    let root = tree.add_root(initial.clone());
    frontier.push(root, initial.clone(), 0);

    while let Some((id, board)) = frontier.pop() {
        if board.is_goal() {
            return Ok(SearchResult::from_goal(
                &tree,
                id,
                nodes_expanded,
                max_search_depth,
            ));
        }

        if let Some(limit) = config.node_limit.filter(|&limit| nodes_expanded >= limit) {
            log::warn!("Node limit of {limit} reached with {} nodes pending", frontier.len());
            return Err(SearchError::NodeLimitReached { limit });
        }

        let depth = tree.get(id).depth + 1;
        explored.insert(board.clone());
        nodes_expanded += 1;

        let batch: Vec<Pending> = board
            .successors()
            .into_iter()
            .filter(|(_, next)| {
                !explored.contains(next)
                    && (!frontier.contains(next) || frontier.readmits(next, depth))
            })
            .map(|(mv, next)| Pending {
                node: tree.add_child(id, mv, next.clone()),
                board: next,
                depth,
            })
            .collect();

        if !batch.is_empty() {
            max_search_depth = max_search_depth.max(depth);
        }
        frontier.extend(batch);

        log::trace!(
            "Frontier size = {}; Explored size = {}",
            frontier.len(),
            explored.len()
        );
    }

    log::warn!("Frontier exhausted after {nodes_expanded} expansions: board is unsolvable");
    Err(SearchError::NoSolutionFound {
        nodes_expanded,
        max_search_depth,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::solver::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};

    fn board(values: &[usize]) -> Board {
        Board::new(values).unwrap()
    }

    #[test_log::test]
    fn bfs_reference_scenario() {
        let start = board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        let result = search(&start, FifoFrontier::default(), &SearchConfig::default()).unwrap();

        assert_eq!(result.path_to_goal, vec![Move::Up, Move::Left, Move::Left]);
        assert_eq!(result.cost_of_path, 3);
        assert_eq!(result.nodes_expanded, 10);
        assert_eq!(result.search_depth, 3);
        assert_eq!(result.max_search_depth, 4);
    }

    #[test_log::test]
    fn solved_board_needs_no_expansion() {
        let start = Board::goal(3).unwrap();
        let config = SearchConfig::default();
        let results = [
            search(&start, FifoFrontier::default(), &config).unwrap(),
            search(&start, LifoFrontier::default(), &config).unwrap(),
            search(&start, PriorityFrontier::default(), &config).unwrap(),
        ];
        for result in results {
            assert!(result.path_to_goal.is_empty());
            assert_eq!(result.cost_of_path, 0);
            assert_eq!(result.nodes_expanded, 0);
            assert_eq!(result.search_depth, 0);
            assert_eq!(result.max_search_depth, 0);
        }
    }

    #[test_log::test]
    fn unsolvable_board_exhausts_frontier() {
        // 2x2 boards have 12 reachable states per parity class
        let start = board(&[0, 2, 1, 3]);
        let err = search(&start, FifoFrontier::default(), &SearchConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SearchError::NoSolutionFound {
                nodes_expanded: 12,
                max_search_depth: 6,
            }
        );
    }

    #[test_log::test]
    fn astar_matches_bfs_cost() {
        let start = board(&[1, 2, 5, 3, 4, 0, 6, 7, 8]);
        let result = search(&start, PriorityFrontier::default(), &SearchConfig::default()).unwrap();
        assert_eq!(result.path_to_goal, vec![Move::Up, Move::Left, Move::Left]);
        assert_eq!(result.nodes_expanded, 3);
        assert!(result.max_search_depth >= result.search_depth);
    }

    #[test_log::test]
    fn dfs_first_expansion_visits_up_first() {
        // Up, Down and Right are legal; Up reaches the goal and must be popped first
        let start = board(&[3, 1, 2, 0, 4, 5, 6, 7, 8]);
        let result = search(&start, LifoFrontier::default(), &SearchConfig::default()).unwrap();
        assert_eq!(result.path_to_goal, vec![Move::Up]);
        assert_eq!(result.nodes_expanded, 1);
        assert_eq!(result.max_search_depth, 1);
    }

    #[test_log::test]
    fn node_limit_stops_search() {
        let start = board(&[8, 6, 4, 2, 1, 3, 5, 7, 0]);
        let err = search(
            &start,
            LifoFrontier::default(),
            &SearchConfig::with_node_limit(100),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::NodeLimitReached { limit: 100 });
    }

    #[test]
    fn node_limit_does_not_block_goal_check() {
        let start = Board::goal(3).unwrap();
        let result = search(
            &start,
            FifoFrontier::default(),
            &SearchConfig::with_node_limit(0),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SearchError::UnsupportedStrategy("foo".to_string()).to_string(),
            "Unsupported strategy 'foo' (expected bfs, dfs or ast)"
        );
        assert!(
            SearchError::NodeLimitReached { limit: 7 }
                .to_string()
                .contains('7')
        );
    }
}
