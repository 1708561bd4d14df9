//! Terminal output formatting
//!
//! Display utilities for CLI results and the plain-text report.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_board, print_solve_report};
pub use formatters::{format_moves, format_report};
