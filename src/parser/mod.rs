//! Pattern extraction for PickUpAndHaul debug lines.
//!
//! Every line that mentions the tracked agent is run through four independent
//! recognizers. A line may match none, one, or several of them:
//!
//! - hauling: `<agent> is hauling to inventory <item>:<quantity>`
//! - job found: `<agent> job found to haul: <item> to (<coords>):<quantity>`
//! - validation: `VALIDATION [Job Creation]: <agent> - targetQueueA: <a>, targetQueueB: <b>, countQueue: <c>`
//! - potential items: `PotentialWorkThingsGlobal for <agent> at (<coords>) found <n> items`
//!
//! All matching is case-insensitive. Lines that match nothing are ignored.

use crate::model::{Extraction, HaulEvent, LogLine};
use regex::Regex;
use std::sync::LazyLock;

/// The pawn whose activity is summarized.
pub const AGENT_NAME: &str = "Jaundice";

/// Lowercased phrases that mark an agent line as a key activity.
pub const KEY_ACTIVITY_KEYWORDS: [&str; 4] = [
    "job found to haul",
    "is hauling to inventory",
    "validation [job creation]",
    "potentialworkthingsglobal",
];

static JAUNDICE_EXTRACTOR: LazyLock<ActivityExtractor> = LazyLock::new(|| {
    ActivityExtractor::new(AGENT_NAME).expect("recognizers for a literal agent name compile")
});

/// Compiled recognizers for one agent.
#[derive(Debug, Clone)]
pub struct ActivityExtractor {
    mention: Regex,
    hauling: Regex,
    job_found: Regex,
    validation: Regex,
    potential_items: Regex,
}

impl ActivityExtractor {
    /// Compile the recognizers for `agent_name`.
    ///
    /// The name is matched literally; regex metacharacters in it are escaped.
    pub fn new(agent_name: &str) -> Result<Self, regex::Error> {
        let agent = regex::escape(agent_name);
        Ok(Self {
            mention: Regex::new(&format!("(?i){agent}"))?,
            hauling: Regex::new(&format!(
                r"(?i){agent} is hauling to inventory (.+?):([0-9]+)"
            ))?,
            job_found: Regex::new(&format!(
                r"(?i){agent} job found to haul: (.+?) to \(.+?\):([0-9]+)"
            ))?,
            validation: Regex::new(&format!(
                r"(?i)VALIDATION \[Job Creation\]: {agent} - targetQueueA: ([0-9]+), targetQueueB: ([0-9]+), countQueue: ([0-9]+)"
            ))?,
            potential_items: Regex::new(&format!(
                r"(?i)PotentialWorkThingsGlobal for {agent} at \(.+?\) found ([0-9]+) items"
            ))?,
        })
    }

    /// Shared extractor for [`AGENT_NAME`].
    pub fn jaundice() -> &'static Self {
        &JAUNDICE_EXTRACTOR
    }

    /// True if the line mentions the agent anywhere.
    pub fn mentions_agent(&self, text: &str) -> bool {
        self.mention.is_match(text)
    }

    /// Run every line through the recognizers and collect the results.
    ///
    /// Blank lines are skipped.
    pub fn extract(&self, lines: &[LogLine]) -> Extraction {
        let mut extraction = Extraction::default();
        for line in lines {
            self.observe(line, &mut extraction);
        }
        tracing::info!(
            activities = extraction.activities.len(),
            haul_events = extraction.haul_events.len(),
            distinct_items = extraction.hauled_items.len(),
            jobs_found = extraction.job_stats.jobs_found,
            validation_entries = extraction.job_stats.validation_entries,
            "Extracted agent activity"
        );
        extraction
    }

    /// Fold one line into `extraction`.
    pub fn observe(&self, line: &LogLine, extraction: &mut Extraction) {
        let text = line.text();
        if line.is_blank() || !self.mentions_agent(text) {
            return;
        }
        extraction.activities.push(line.clone());

        if let Some(caps) = self.hauling.captures(text) {
            let quantity = parse_count(&caps[2], line);
            extraction.record_haul(HaulEvent::new(&caps[1], quantity));
        }

        if self.job_found.is_match(text) {
            extraction.job_stats.record_job_found();
        }

        if let Some(caps) = self.validation.captures(text) {
            extraction.job_stats.record_validation(
                parse_count(&caps[1], line),
                parse_count(&caps[2], line),
                parse_count(&caps[3], line),
            );
        }

        if let Some(caps) = self.potential_items.captures(text) {
            extraction
                .job_stats
                .record_potential_items(parse_count(&caps[1], line));
        }
    }
}

/// True if the lowercased text contains any key-activity phrase.
pub fn is_key_activity(text: &str) -> bool {
    let lower = text.to_lowercase();
    KEY_ACTIVITY_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Parse a recognizer's digit group, saturating at `u64::MAX`.
///
/// A matched line always contributes its facts; only the value is clamped.
fn parse_count(digits: &str, line: &LogLine) -> u64 {
    digits.parse::<u64>().unwrap_or_else(|e| {
        tracing::warn!(
            line = line.line_number(),
            value = digits,
            error = %e,
            "Count out of range, saturating"
        );
        u64::MAX
    })
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
