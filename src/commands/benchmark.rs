//! Benchmark command
//!
//! Runs every strategy over a batch of scrambled boards and compares them.
//! Each search is independent, so boards are spread across the rayon pool.

use super::scramble::scramble;
use crate::core::{Board, BoardError};
use crate::measure::timed;
use crate::solver::{SearchConfig, SearchError, SearchResult, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub dimension: usize,
    pub count: usize,
    pub scramble_moves: usize,
    pub seed: u64,
    pub search: SearchConfig,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(dimension: usize, count: usize) -> Self {
        Self {
            dimension,
            count,
            scramble_moves: 20,
            seed: 0,
            search: SearchConfig::with_node_limit(200_000),
            show_progress: true,
        }
    }
}

/// Aggregated figures for one strategy
#[derive(Debug, Clone)]
pub struct StrategySummary {
    pub strategy: Strategy,
    pub solved: usize,
    pub failed: usize,
    /// Solved boards where the path was as short as the best any strategy found
    pub optimal: usize,
    pub average_cost: f64,
    pub average_expanded: f64,
    pub deepest: usize,
    pub total_time: Duration,
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub dimension: usize,
    pub boards: Vec<Board>,
    pub summaries: Vec<StrategySummary>,
    pub duration: Duration,
}

type Run = (Result<SearchResult, SearchError>, Duration);

/// Run benchmark on freshly scrambled boards
///
/// # Errors
/// Returns `BoardError` if the configured dimension is not supported.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkResult, BoardError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let boards = (0..config.count)
        .map(|_| scramble(config.dimension, config.scramble_moves, &mut rng))
        .collect::<Result<Vec<_>, _>>()?;

    let total = (boards.len() * Strategy::ALL.len()) as u64;
    let pb = if config.show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let runs: Vec<Vec<Run>> = Strategy::ALL
        .iter()
        .map(|&strategy| {
            pb.set_message(format!("{strategy}"));
            boards
                .par_iter()
                .map(|board| {
                    let run = timed(|| strategy.search_with(board, &config.search));
                    pb.inc(1);
                    run
                })
                .collect()
        })
        .collect();
    pb.finish_with_message("Complete!");

    let best_costs: Vec<Option<usize>> = (0..boards.len())
        .map(|i| {
            runs.iter()
                .filter_map(|per_strategy| per_strategy[i].0.as_ref().ok())
                .map(|result| result.cost_of_path)
                .min()
        })
        .collect();

    let summaries = Strategy::ALL
        .iter()
        .zip(&runs)
        .map(|(&strategy, per_strategy)| summarize(strategy, per_strategy, &best_costs))
        .collect();

    Ok(BenchmarkResult {
        dimension: config.dimension,
        boards,
        summaries,
        duration: start.elapsed(),
    })
}

fn summarize(strategy: Strategy, runs: &[Run], best_costs: &[Option<usize>]) -> StrategySummary {
    let solved: Vec<&SearchResult> = runs.iter().filter_map(|(r, _)| r.as_ref().ok()).collect();
    let optimal = runs
        .iter()
        .zip(best_costs)
        .filter(|((outcome, _), best)| {
            outcome
                .as_ref()
                .is_ok_and(|result| Some(result.cost_of_path) == **best)
        })
        .count();

    let average = |f: fn(&SearchResult) -> usize| {
        if solved.is_empty() {
            0.0
        } else {
            solved.iter().map(|r| f(r)).sum::<usize>() as f64 / solved.len() as f64
        }
    };

    StrategySummary {
        strategy,
        solved: solved.len(),
        failed: runs.len() - solved.len(),
        optimal,
        average_cost: average(|r| r.cost_of_path),
        average_expanded: average(|r| r.nodes_expanded),
        deepest: solved.iter().map(|r| r.max_search_depth).max().unwrap_or(0),
        total_time: runs.iter().map(|(_, d)| *d).sum(),
    }
}
