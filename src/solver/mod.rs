//! N-puzzle search algorithms
//!
//! This module contains the three search strategies and the building blocks they share.

mod engine;
pub mod explored;
pub mod frontier;
mod heuristic;
mod result;
pub mod strategy;
pub mod tree;

pub use engine::{SearchConfig, SearchError, search};
pub use explored::ExploredSet;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, Pending, PriorityFrontier};
pub use heuristic::manhattan_distance;
pub use result::SearchResult;
pub use strategy::Strategy;
pub use tree::{Node, NodeId, SearchTree};
