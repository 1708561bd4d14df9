//! Search strategies
//!
//! Maps a strategy name to a frontier discipline and runs the shared driver.

use super::engine::{SearchConfig, SearchError, search};
use super::frontier::{FifoFrontier, LifoFrontier, PriorityFrontier};
use super::result::SearchResult;
use crate::core::Board;
use std::fmt;
use std::str::FromStr;

/// One of the three supported traversal strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first search (FIFO frontier)
    BreadthFirst,
    /// Depth-first search (LIFO frontier)
    DepthFirst,
    /// A* with the Manhattan-distance heuristic
    AStar,
}

impl Strategy {
    /// Every strategy, in report order
    pub const ALL: [Self; 3] = [Self::BreadthFirst, Self::DepthFirst, Self::AStar];

    /// Create strategy from name string
    ///
    /// Supported names: "bfs", "dfs", "ast"
    ///
    /// # Errors
    /// Returns `SearchError::UnsupportedStrategy` for any other name.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_search::solver::Strategy;
    ///
    /// assert_eq!(Strategy::from_name("ast").unwrap(), Strategy::AStar);
    /// assert!(Strategy::from_name("ids").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        match name {
            "bfs" => Ok(Self::BreadthFirst),
            "dfs" => Ok(Self::DepthFirst),
            "ast" => Ok(Self::AStar),
            other => Err(SearchError::UnsupportedStrategy(other.to_string())),
        }
    }

    /// Short selector name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::AStar => "ast",
        }
    }

    /// Solve `board` with default settings
    ///
    /// # Errors
    /// See [`Strategy::search_with`].
    pub fn search(self, board: &Board) -> Result<SearchResult, SearchError> {
        self.search_with(board, &SearchConfig::default())
    }

    /// Solve `board` with explicit settings
    ///
    /// # Errors
    /// Returns `SearchError::NoSolutionFound` for unsolvable boards and
    /// `SearchError::NodeLimitReached` if the configured limit is hit.
    pub fn search_with(
        self,
        board: &Board,
        config: &SearchConfig,
    ) -> Result<SearchResult, SearchError> {
        let m = board.dimension();
        log::info!("Starting {self} search on a {m}x{m} board");
        let outcome = match self {
            Self::BreadthFirst => search(board, FifoFrontier::default(), config),
            Self::DepthFirst => search(board, LifoFrontier::default(), config),
            Self::AStar => search(board, PriorityFrontier::default(), config),
        };

        if let Ok(result) = &outcome {
            log::info!(
                "{self} found a path of cost {} after {} expansions (max depth {})",
                result.cost_of_path,
                result.nodes_expanded,
                result.max_search_depth
            );
        }
        outcome
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
