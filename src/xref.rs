//! Cross-referencing of hauled items against the whole log.
//!
//! Matching is plain, case-sensitive substring containment. An item named
//! `Log` therefore also matches a line mentioning `Logger`.

use crate::model::LogLine;
use std::collections::HashSet;

/// Collect every line containing at least one of `items`.
///
/// Scans all lines, not only agent lines. Each line is included at most once
/// and original order is kept. An empty item set returns immediately.
pub fn cross_reference(items: &HashSet<String>, lines: &[LogLine]) -> Vec<LogLine> {
    if items.is_empty() {
        return Vec::new();
    }

    let related: Vec<LogLine> = lines
        .iter()
        .filter(|line| items.iter().any(|item| line.text().contains(item.as_str())))
        .cloned()
        .collect();

    tracing::info!(
        items = items.len(),
        related_lines = related.len(),
        "Cross-referenced hauled items"
    );
    related
}
