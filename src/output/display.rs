//! Display functions for command results

use super::formatters::{create_progress_bar, format_moves};
use crate::commands::{BenchmarkResult, SolveReport};
use crate::core::Board;
use colored::Colorize;

/// Print a board as a grid with the blank highlighted
pub fn print_board(board: &Board) {
    let width = (board.tiles().len() - 1).to_string().len();
    for row in board.tiles().chunks(board.dimension()) {
        let cells: Vec<String> = row
            .iter()
            .map(|&tile| {
                let cell = format!("{tile:>width$}");
                if tile == 0 {
                    cell.bright_black().to_string()
                } else {
                    cell.bright_white().bold().to_string()
                }
            })
            .collect();
        println!("   {}", cells.join(" "));
    }
}

/// Print the result of solving a board
pub fn print_solve_report(report: &SolveReport) {
    let result = &report.result;

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving with {}",
        report.strategy.to_string().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    print_board(&report.board);

    println!("\n📊 {}", "Result:".bright_cyan().bold());
    println!("   path_to_goal:     {}", format_moves(&result.path_to_goal));
    println!(
        "   cost_of_path:     {}",
        result.cost_of_path.to_string().green().bold()
    );
    println!("   nodes_expanded:   {}", result.nodes_expanded);
    println!("   search_depth:     {}", result.search_depth);
    println!("   max_search_depth: {}", result.max_search_depth);
    if let Some(running_time) = result.running_time {
        println!("   running_time:     {:.8}", running_time.as_secs_f64());
    }
    if let Some(max_ram_usage) = result.max_ram_usage {
        println!("   max_ram_usage:    {max_ram_usage:.8}");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 {} boards of size {}x{}, {:.2}s total",
        result.boards.len(),
        result.dimension,
        result.dimension,
        result.duration.as_secs_f64()
    );

    let most_expanded = result
        .summaries
        .iter()
        .map(|s| s.average_expanded)
        .fold(0.0, f64::max);

    for summary in &result.summaries {
        println!(
            "\n{} {}",
            "▶".bright_cyan(),
            summary.strategy.to_string().to_uppercase().bold()
        );
        let solved = format!("{}/{}", summary.solved, summary.solved + summary.failed);
        if summary.failed == 0 {
            println!("   Solved:          {}", solved.green());
        } else {
            println!("   Solved:          {}", solved.yellow());
        }
        println!(
            "   Optimal paths:   {}",
            format!("{}", summary.optimal).bright_yellow()
        );
        println!("   Average cost:    {:.2}", summary.average_cost);
        println!(
            "   Average expanded: {} {:.1}",
            create_progress_bar(summary.average_expanded, most_expanded, 30).green(),
            summary.average_expanded
        );
        println!("   Deepest node:    {}", summary.deepest);
        println!("   Search time:     {:.3}s", summary.total_time.as_secs_f64());
    }
}
