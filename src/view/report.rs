//! Summary report rendering (pure).
//!
//! Produces the report as an ordered list of lines. Empty strings in the list
//! are the blank separators between sections.

use super::constants::{
    BANNER_TITLE, BANNER_WIDTH, CROSS_REFERENCE_CAPTION, ITEM_INDENT, LINE_NUMBER_WIDTH,
};
use crate::model::{LogLine, Summary};
use crate::parser::is_key_activity;

/// Render the full report for `summary`.
///
/// Sections, in order: banner, statistics, items hauled, item summary, key
/// activities, and lines related to hauled items. Output is deterministic for
/// a given summary.
pub fn render_report(summary: &Summary) -> Vec<String> {
    let mut out = Vec::new();
    render_banner(&mut out);
    render_statistics(summary, &mut out);
    render_items_hauled(summary, &mut out);
    render_item_summary(summary, &mut out);
    render_key_activities(summary, &mut out);
    render_cross_references(summary, &mut out);
    out
}

fn render_banner(out: &mut Vec<String>) {
    let rule = "=".repeat(BANNER_WIDTH);
    out.push(rule.clone());
    out.push(BANNER_TITLE.to_string());
    out.push(rule);
}

fn render_statistics(summary: &Summary, out: &mut Vec<String>) {
    let extraction = &summary.extraction;
    let stats = &extraction.job_stats;

    out.push(String::new());
    out.push("STATISTICS:".to_string());
    out.push(bullet(format!(
        "Total Jaundice-related log entries: {}",
        extraction.activities.len()
    )));
    out.push(bullet(format!("Jobs found: {}", stats.jobs_found)));
    out.push(bullet(format!(
        "Validation entries: {}",
        stats.validation_entries
    )));
    out.push(bullet(format!(
        "Maximum potential items found: {}",
        stats.potential_items_found
    )));
    out.push(bullet(format!("Max targetQueueA: {}", stats.target_queue_a)));
    out.push(bullet(format!("Max targetQueueB: {}", stats.target_queue_b)));
    out.push(bullet(format!("Max countQueue: {}", stats.count_queue)));
}

fn render_items_hauled(summary: &Summary, out: &mut Vec<String>) {
    let events = &summary.extraction.haul_events;

    out.push(String::new());
    out.push(format!("ITEMS HAULED ({} total):", events.len()));
    for event in events {
        out.push(bullet(format!("{}: {}", event.item_name, event.quantity)));
    }
}

fn render_item_summary(summary: &Summary, out: &mut Vec<String>) {
    out.push(String::new());
    out.push("ITEM SUMMARY:".to_string());
    for (item_name, total) in summary.extraction.item_totals.iter() {
        out.push(bullet(format!("{item_name}: {total} total")));
    }
}

fn render_key_activities(summary: &Summary, out: &mut Vec<String>) {
    out.push(String::new());
    out.push("KEY JAUNDICE ACTIVITIES:".to_string());
    out.extend(
        summary
            .extraction
            .activities
            .iter()
            .filter(|line| is_key_activity(line.text()))
            .map(numbered_line),
    );
}

fn render_cross_references(summary: &Summary, out: &mut Vec<String>) {
    out.push(String::new());
    out.push(format!(
        "ALL LOGS RELATED TO HAULED ITEMS ({} entries):",
        summary.cross_references.len()
    ));
    out.push(format!("{ITEM_INDENT}{CROSS_REFERENCE_CAPTION}"));
    out.extend(summary.cross_references.iter().map(numbered_line));
}

fn bullet(text: String) -> String {
    format!("{ITEM_INDENT}* {text}")
}

/// `   [Line   42] text`, with the number right-aligned.
pub fn numbered_line(line: &LogLine) -> String {
    format!(
        "{ITEM_INDENT}[Line {:>width$}] {}",
        line.line_number(),
        line.text(),
        width = LINE_NUMBER_WIDTH
    )
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
