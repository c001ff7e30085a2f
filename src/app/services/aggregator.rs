//! Event aggregation across parsed files
//!
//! Folds parsed event records into the run-wide aggregate state: per
//! identifier minimum day-diff tracking for one target event code, event
//! code occurrence counts, and the set of identifiers seen. One aggregator
//! instance lives for exactly one scan and is consumed by the reporter.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::app::models::EventRecord;
use crate::app::services::event_file_parser::dates::{coarse_day_index, format_short};

/// Run-wide aggregate state, built record by record.
///
/// Minimum tracking is "smaller is better" on the signed day difference
/// between file creation and event time: a stored entry is replaced only
/// when the candidate's difference is strictly smaller, so ties keep the
/// first record seen.
#[derive(Debug, Clone)]
pub struct EventAggregator {
    /// Event code whose records participate in minimum tracking
    target_event_code: String,
    /// Per identifier record with the smallest day diff seen so far
    min_diff_by_stt: HashMap<i64, EventRecord>,
    /// Occurrence count per event code, one increment per parsed file
    event_counts: HashMap<String, usize>,
    /// Every shipment identifier encountered
    stts_seen: HashSet<i64>,
    /// Records whose file and header creation dates disagreed
    consistency_mismatches: usize,
}

impl EventAggregator {
    /// Create an empty aggregator tracking the given target event code.
    pub fn new(target_event_code: impl Into<String>) -> Self {
        Self {
            target_event_code: target_event_code.into(),
            min_diff_by_stt: HashMap::new(),
            event_counts: HashMap::new(),
            stts_seen: HashSet::new(),
            consistency_mismatches: 0,
        }
    }

    /// Fold one parsed record into the aggregate state.
    ///
    /// Every readable record contributes to the event counts and the
    /// identifier set. Records carrying the target event code additionally
    /// compete for their identifier's minimum day-diff slot. The unreadable
    /// sentinel record contributes nothing.
    pub fn observe(&mut self, record: &EventRecord) {
        if record.is_unreadable() {
            debug!("skipping unreadable sentinel record");
            return;
        }

        *self
            .event_counts
            .entry(record.event_code.clone())
            .or_insert(0) += 1;
        self.stts_seen.insert(record.stt);

        if record.event_code != self.target_event_code {
            return;
        }

        match self.min_diff_by_stt.entry(record.stt) {
            Entry::Occupied(mut slot) => {
                if slot.get().diff_days() > record.diff_days() {
                    slot.insert(record.clone());
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
            }
        }
    }

    /// Compare a record's file creation date against its header creation
    /// date on the coarse day index.
    ///
    /// A disagreement is logged and tallied, never raised. Returns whether
    /// the two dates matched.
    pub fn check_consistency(&mut self, record: &EventRecord) -> bool {
        let file_days = coarse_day_index(record.file_creation_time);
        let header_days = coarse_day_index(record.header_creation_time);

        if file_days != header_days {
            warn!(
                "creation date mismatch for shipment {}: file stamp {} vs header {}",
                record.stt,
                format_short(record.file_creation_time),
                format_short(record.header_creation_time)
            );
            self.consistency_mismatches += 1;
            return false;
        }

        true
    }

    /// Records holding the minimum day diff, ordered by identifier.
    pub fn min_diff_records(&self) -> Vec<&EventRecord> {
        let mut records: Vec<&EventRecord> = self.min_diff_by_stt.values().collect();
        records.sort_by_key(|record| record.stt);
        records
    }

    /// Occurrence counts per event code.
    pub fn event_counts(&self) -> &HashMap<String, usize> {
        &self.event_counts
    }

    /// Number of distinct identifiers seen across all parsed files.
    pub fn distinct_stt_count(&self) -> usize {
        self.stts_seen.len()
    }

    /// Number of records that failed the creation date consistency check.
    pub fn consistency_mismatches(&self) -> usize {
        self.consistency_mismatches
    }

    /// Event code the minimum tracking is scoped to.
    pub fn target_event_code(&self) -> &str {
        &self.target_event_code
    }
}
