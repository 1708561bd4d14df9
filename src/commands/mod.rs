//! Command implementations

pub mod benchmark;
pub mod scramble;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, StrategySummary, run_benchmark};
pub use scramble::{ScrambleConfig, generate, scramble};
pub use solve::{SolveConfig, SolveReport, solve_board, write_report};
