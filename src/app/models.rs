//! Data models for CE event processing
//!
//! This module contains the core data structure extracted from one CE event
//! interchange file: the shipment identifier, the dates carried on the header
//! and event records, and the event code.

use crate::constants::{UNREADABLE_STT, sentinel_date};
use chrono::NaiveDate;
use std::time::Duration;

// =============================================================================
// Event Record
// =============================================================================

/// One parsed CE event interchange file, immutable once constructed
///
/// Every date field holds the sentinel zero date (0001-01-01) when its source
/// text failed to parse; the recovery is silent and never aborts a scan.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    /// Shipment tracking identifier (STT); 0 when the shipment record never
    /// yielded a parseable value, -1 for unreadable source files
    pub stt: i64,

    /// Creation date embedded in the source file's path
    pub file_creation_time: NaiveDate,

    /// Event timestamp from the event-shipment record
    pub event_time: NaiveDate,

    /// Creation date from the header record (field after the project id)
    pub header_creation_time: NaiveDate,

    /// Event code from the event-shipment record (e.g. "ICBK")
    pub event_code: String,
}

impl EventRecord {
    /// Create a new event record
    pub fn new(
        stt: i64,
        file_creation_time: NaiveDate,
        event_time: NaiveDate,
        header_creation_time: NaiveDate,
        event_code: String,
    ) -> Self {
        Self {
            stt,
            file_creation_time,
            event_time,
            header_creation_time,
            event_code,
        }
    }

    /// The sentinel record standing in for a file that could not be read
    pub fn unreadable() -> Self {
        Self {
            stt: UNREADABLE_STT,
            file_creation_time: sentinel_date(),
            event_time: sentinel_date(),
            header_creation_time: sentinel_date(),
            event_code: String::new(),
        }
    }

    /// Whether this record is the unreadable-source sentinel
    pub fn is_unreadable(&self) -> bool {
        self.stt == UNREADABLE_STT
    }

    /// Signed whole days between file creation and the event time
    /// (`file_creation_time - event_time`)
    pub fn diff_days(&self) -> i64 {
        (self.file_creation_time - self.event_time).num_days()
    }
}

// =============================================================================
// Scan Statistics
// =============================================================================

/// Counters for one scan run
#[derive(Debug, Clone, PartialEq)]
pub struct ScanStats {
    /// Candidate paths discovered under the scan root
    pub files_discovered: usize,
    /// Files parsed into an event record
    pub files_parsed: usize,
    /// Candidates that could not be read (missing, binary, or a directory)
    pub files_unreadable: usize,
    /// Readable candidates with a missing record line, field, or path stamp
    pub files_malformed: usize,
    /// Wall clock time for the whole scan
    pub elapsed: Duration,
}

impl ScanStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self {
            files_discovered: 0,
            files_parsed: 0,
            files_unreadable: 0,
            files_malformed: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Candidates that produced no record
    pub fn files_failed(&self) -> usize {
        self.files_unreadable + self.files_malformed
    }

    /// Parsed share of discovered candidates, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.files_discovered == 0 {
            100.0
        } else {
            (self.files_parsed as f64 / self.files_discovered as f64) * 100.0
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
