//! Board solving command
//!
//! Validates the input, runs one search and attaches time and memory figures.

use crate::core::Board;
use crate::measure::measure_peak;
use crate::output::format_report;
use crate::solver::{SearchConfig, SearchResult, Strategy};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for solving a board
pub struct SolveConfig {
    pub strategy: String,
    pub board: String,
    pub search: SearchConfig,
    /// Where to write the report, if anywhere
    pub output: Option<PathBuf>,
}

impl SolveConfig {
    #[must_use]
    pub fn new(strategy: impl Into<String>, board: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            board: board.into(),
            search: SearchConfig::default(),
            output: Some(PathBuf::from("output.txt")),
        }
    }
}

/// Result of solving a board
#[derive(Debug)]
pub struct SolveReport {
    pub board: Board,
    pub strategy: Strategy,
    pub result: SearchResult,
}

/// Solve the configured board and write the report file
///
/// # Errors
///
/// Returns an error if:
/// - The board is malformed (checked before anything else)
/// - The strategy name is not one of bfs, dfs, ast
/// - The search exhausts the frontier or hits the node limit
/// - The report file cannot be written
pub fn solve_board(config: &SolveConfig) -> Result<SolveReport> {
    let board: Board = config
        .board
        .parse()
        .with_context(|| format!("Invalid board '{}'", config.board))?;
    let strategy = Strategy::from_name(&config.strategy)?;

    let measured = measure_peak(|| strategy.search_with(&board, &config.search))
        .map_err(|e| anyhow::anyhow!("Failed to read memory statistics: {e}"))?;
    let result = measured
        .output?
        .with_measurements(measured.elapsed, measured.peak_megabytes);

    if let Some(path) = &config.output {
        write_report(path, &result)?;
    }

    Ok(SolveReport {
        board,
        strategy,
        result,
    })
}

/// Write the plain-text report to `path`
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_report(path: &Path, result: &SearchResult) -> Result<()> {
    fs::write(path, format_report(result))
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    log::info!("Report written to {}", path.display());
    Ok(())
}
