//! Formatting utilities for reports

use crate::core::Move;
use crate::solver::SearchResult;

/// Format moves as a quoted list, e.g. `['Up', 'Left']`
#[must_use]
pub fn format_moves(moves: &[Move]) -> String {
    let quoted: Vec<String> = moves.iter().map(|mv| format!("'{mv}'")).collect();
    format!("[{}]", quoted.join(", "))
}

/// The plain-text report: one `key: value` line per field
///
/// Missing measurements are reported as zero.
#[must_use]
pub fn format_report(result: &SearchResult) -> String {
    let running_time = result.running_time.map_or(0.0, |d| d.as_secs_f64());
    let max_ram_usage = result.max_ram_usage.unwrap_or(0.0);

    format!(
        "path_to_goal: {}\n\
         cost_of_path: {}\n\
         nodes_expanded: {}\n\
         search_depth: {}\n\
         max_search_depth: {}\n\
         running_time: {running_time:.8}\n\
         max_ram_usage: {max_ram_usage:.8}\n",
        format_moves(&result.path_to_goal),
        result.cost_of_path,
        result.nodes_expanded,
        result.search_depth,
        result.max_search_depth,
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
