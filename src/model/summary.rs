//! Per-run accumulators passed between pipeline stages.

use crate::model::{HaulEvent, ItemTotals, JobStats, LogLine};
use std::collections::HashSet;

/// Facts gathered from the agent's lines in one pass over the log.
///
/// # Invariants
///
/// - Every `haul_events` item name is in `hauled_items`
/// - `item_totals` has exactly the keys of `hauled_items`
/// - `activities` keeps file order
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Every line mentioning the agent.
    pub activities: Vec<LogLine>,
    /// Haul events in extraction order, duplicates kept.
    pub haul_events: Vec<HaulEvent>,
    /// Distinct hauled item names.
    pub hauled_items: HashSet<String>,
    /// Job-creation counters and maxima.
    pub job_stats: JobStats,
    /// Summed quantity per item, first-seen order.
    pub item_totals: ItemTotals,
}

impl Extraction {
    /// Record a haul event, keeping the item set and totals in step.
    pub fn record_haul(&mut self, event: HaulEvent) {
        self.item_totals.add(&event.item_name, event.quantity);
        self.hauled_items.insert(event.item_name.clone());
        self.haul_events.push(event);
    }
}

/// Everything the report renderer needs.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Facts from the agent's own lines.
    pub extraction: Extraction,
    /// Lines from the whole file mentioning any hauled item.
    pub cross_references: Vec<LogLine>,
}
