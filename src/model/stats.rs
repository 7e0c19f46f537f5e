//! Hauling statistics accumulated during extraction.
//!
//! All accumulators here are monotonic: counts only increase and maxima only
//! ratchet upward, so the final state does not depend on the order in which
//! recognizers fire within a line.

use std::collections::HashMap;

// ===== HaulEvent =====

/// One "is hauling to inventory" observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HaulEvent {
    /// Item identifier as written in the log, e.g. `Steel4821`.
    pub item_name: String,
    /// Stack size moved, saturated at `u64::MAX`.
    pub quantity: u64,
}

impl HaulEvent {
    /// Create a haul event.
    pub fn new(item_name: impl Into<String>, quantity: u64) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}

// ===== JobStats =====

/// Job-creation counters for the tracked agent.
///
/// # Invariants
///
/// - `jobs_found` and `validation_entries` are occurrence counts
/// - `potential_items_found`, `target_queue_a`, `target_queue_b` and `count_queue`
///   hold the running maximum of every value observed
/// - Every field is 0 until its recognizer first matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobStats {
    /// Number of "job found to haul" lines.
    pub jobs_found: usize,
    /// Number of "VALIDATION [Job Creation]" lines.
    pub validation_entries: usize,
    /// Largest `found <n> items` value from PotentialWorkThingsGlobal.
    pub potential_items_found: u64,
    /// Largest targetQueueA length seen during validation.
    pub target_queue_a: u64,
    /// Largest targetQueueB length seen during validation.
    pub target_queue_b: u64,
    /// Largest countQueue length seen during validation.
    pub count_queue: u64,
}

impl JobStats {
    /// Count one "job found to haul" line.
    pub fn record_job_found(&mut self) {
        self.jobs_found += 1;
    }

    /// Record one job-creation validation line.
    pub fn record_validation(&mut self, queue_a: u64, queue_b: u64, count_queue: u64) {
        self.target_queue_a = self.target_queue_a.max(queue_a);
        self.target_queue_b = self.target_queue_b.max(queue_b);
        self.count_queue = self.count_queue.max(count_queue);
        self.validation_entries += 1;
    }

    /// Raise the potential-items maximum to `found` if larger.
    pub fn record_potential_items(&mut self, found: u64) {
        self.potential_items_found = self.potential_items_found.max(found);
    }
}

// ===== ItemTotals =====

/// Summed haul quantity per item, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl ItemTotals {
    /// Add `quantity` to the running total for `item_name`.
    ///
    /// Saturates instead of overflowing.
    pub fn add(&mut self, item_name: &str, quantity: u64) {
        match self.index.get(item_name) {
            Some(&idx) => {
                let total = &mut self.entries[idx].1;
                *total = total.saturating_add(quantity);
            }
            None => {
                self.index.insert(item_name.to_string(), self.entries.len());
                self.entries.push((item_name.to_string(), quantity));
            }
        }
    }

    /// Total for `item_name`, or `None` if it was never hauled.
    pub fn get(&self, item_name: &str) -> Option<u64> {
        self.index.get(item_name).map(|&idx| self.entries[idx].1)
    }

    /// Iterate `(item_name, total)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been hauled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
