//! Core domain types for the N-puzzle
//!
//! This module contains the board and move types with zero external dependencies.
//! Boards are immutable values; every move produces a new board.

mod board;
mod moves;

pub use board::{Board, BoardError, MAX_DIMENSION};
pub use moves::Move;
