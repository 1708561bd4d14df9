//! Explored set
//!
//! States are recorded when their node is popped for expansion, not when first
//! discovered.

use crate::core::Board;
use rustc_hash::FxHashSet;

/// Board states already removed from the frontier and expanded
#[derive(Debug, Default)]
pub struct ExploredSet {
    states: FxHashSet<Board>,
}

impl ExploredSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a state, returning `false` if it was already present
    pub fn insert(&mut self, board: Board) -> bool {
        self.states.insert(board)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, board: &Board) -> bool {
        self.states.contains(board)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;

    #[test]
    fn tracks_states_by_value() {
        let mut explored = ExploredSet::new();
        let start = Board::new(&[1, 0, 2, 3]).unwrap();
        assert!(explored.is_empty());
        assert!(explored.insert(start.clone()));
        assert!(!explored.insert(start.clone()));
        assert_eq!(explored.len(), 1);

        // Reaching the same tiles by another route is still a hit
        let round_trip = start.apply(Move::Left).unwrap().apply(Move::Right).unwrap();
        assert!(explored.contains(&round_trip));
        assert!(!explored.contains(&Board::goal(2).unwrap()));
    }
}
