//! Property tests for aggregation and cross-reference invariants.

use crate::integration::summarize;
use crate::model::{JobStats, LogLine};
use crate::parser::ActivityExtractor;
use crate::source::split_lines;
use crate::view::render_report;
use proptest::prelude::*;
use std::collections::HashMap;

// ===== Generators =====

fn arb_item() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,6}[0-9]{0,3}"
}

/// One log line: a Jaundice haul, another pawn's mention of an item, or noise.
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (arb_item(), 0u64..10_000)
            .prop_map(|(item, qty)| format!("Jaundice is hauling to inventory {item}:{qty}")),
        arb_item().prop_map(|item| format!("Tarrow reserved {item} at (1, 0, 2)")),
        "[a-z ]{0,24}",
        Just(String::new()),
    ]
}

fn arb_log() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

fn validation_line(a: u64, b: u64, c: u64) -> String {
    format!(
        "VALIDATION [Job Creation]: Jaundice - targetQueueA: {a}, targetQueueB: {b}, countQueue: {c}"
    )
}

fn stats_for(lines: &[String]) -> JobStats {
    let numbered: Vec<LogLine> = lines
        .iter()
        .enumerate()
        .map(|(idx, text)| LogLine::new(idx + 1, text.as_str()))
        .collect();
    summarize(ActivityExtractor::jaundice(), &numbered)
        .extraction
        .job_stats
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Rendered "items hauled" entries match the extracted events one-to-one,
    /// and summing them per item reproduces the item totals.
    #[test]
    fn items_hauled_block_matches_events_and_totals(log in arb_log()) {
        let summary = summarize(ActivityExtractor::jaundice(), &split_lines(&log));
        let report = render_report(&summary);
        let extraction = &summary.extraction;

        let start = report.iter().position(|l| l.starts_with("ITEMS HAULED (")).unwrap();
        let end = report.iter().position(|l| l == "ITEM SUMMARY:").unwrap();
        let entries = &report[start + 1..end - 1];
        prop_assert_eq!(entries.len(), extraction.haul_events.len());

        let mut sums: HashMap<&str, u64> = HashMap::new();
        for event in &extraction.haul_events {
            *sums.entry(event.item_name.as_str()).or_default() += event.quantity;
            prop_assert!(extraction.hauled_items.contains(&event.item_name));
        }
        prop_assert_eq!(sums.len(), extraction.item_totals.len());
        for (item, total) in extraction.item_totals.iter() {
            prop_assert_eq!(sums.get(item).copied(), Some(total));
        }
    }

    /// Every cross-referenced line contains a hauled item, and no line
    /// containing one is left out.
    #[test]
    fn cross_references_are_sound_and_complete(log in arb_log()) {
        let lines = split_lines(&log);
        let summary = summarize(ActivityExtractor::jaundice(), &lines);
        let items = &summary.extraction.hauled_items;

        let expected: Vec<usize> = lines
            .iter()
            .filter(|line| items.iter().any(|item| line.text().contains(item.as_str())))
            .map(LogLine::line_number)
            .collect();
        let actual: Vec<usize> = summary
            .cross_references
            .iter()
            .map(LogLine::line_number)
            .collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(items.is_empty(), summary.cross_references.is_empty());
    }

    /// Queue maxima never decrease as validation lines are appended.
    #[test]
    fn queue_maxima_are_monotonic(
        values in prop::collection::vec((0u64..1000, 0u64..1000, 0u64..1000), 1..20)
    ) {
        let mut lines = Vec::new();
        let mut previous = JobStats::default();
        for (a, b, c) in values {
            lines.push(validation_line(a, b, c));
            let current = stats_for(&lines);
            prop_assert!(current.target_queue_a >= previous.target_queue_a);
            prop_assert!(current.target_queue_b >= previous.target_queue_b);
            prop_assert!(current.count_queue >= previous.count_queue);
            prop_assert_eq!(current.validation_entries, lines.len());
            previous = current;
        }
    }

    /// Reordering validation lines does not change the final statistics.
    #[test]
    fn queue_maxima_ignore_line_order(
        values in prop::collection::vec((0u64..1000, 0u64..1000, 0u64..1000), 0..20)
    ) {
        let forward: Vec<String> = values.iter().map(|&(a, b, c)| validation_line(a, b, c)).collect();
        let mut backward = forward.clone();
        backward.reverse();

        prop_assert_eq!(stats_for(&forward), stats_for(&backward));
    }

    /// Same input, same report.
    #[test]
    fn report_is_deterministic(log in arb_log()) {
        let first = render_report(&summarize(ActivityExtractor::jaundice(), &split_lines(&log)));
        let second = render_report(&summarize(ActivityExtractor::jaundice(), &split_lines(&log)));
        prop_assert_eq!(first, second);
    }
}
