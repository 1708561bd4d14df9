//! N-puzzle Solver
//!
//! Solves sliding-tile puzzles with breadth-first, depth-first or A* search, all sharing
//! one board representation, one successor order (Up, Down, Left, Right) and one set of
//! search statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use npuzzle_search::core::{Board, Move};
//! use npuzzle_search::solver::Strategy;
//!
//! let board: Board = "1,2,5,3,4,0,6,7,8".parse().unwrap();
//! let result = Strategy::BreadthFirst.search(&board).unwrap();
//!
//! assert_eq!(result.path_to_goal, vec![Move::Up, Move::Left, Move::Left]);
//! assert_eq!(result.nodes_expanded, 10);
//! assert_eq!(result.max_search_depth, 4);
//! ```

// Core domain types
pub mod core;

// Search algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Time and memory sampling
pub mod measure;

// Terminal output formatting
pub mod output;
