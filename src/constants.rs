//! Application constants for the CE event analyzer
//!
//! This module contains the fixed CE record format markers, field positions,
//! and default values used throughout the analyzer.

// =============================================================================
// CE Record Format
// =============================================================================

/// Record tag opening a header record
pub const RECORD_TAG_HEADER: &str = "CEHEADER02";

/// Record tag opening a shipment record (carries the STT identifier)
pub const RECORD_TAG_SHIPMENT: &str = "CESHP___04";

/// Record tag opening an event-shipment record
pub const RECORD_TAG_EVENT: &str = "CEEVTSHP04";

/// Every record tag is exactly this many bytes, followed by one separator byte
pub const RECORD_TAG_LEN: usize = 10;

/// Field delimiter within a record line
pub const FIELD_DELIMITER: char = '|';

/// Field positions, 1-based after the tag and its separator byte.
///
/// On the header line field 1 is the project id; the creation date follows it.
pub const HEADER_CREATION_DATE_FIELD: usize = 2;
pub const EVENT_CODE_FIELD: usize = 2;
pub const EVENT_TIME_FIELD: usize = 9;

/// On the shipment line the STT is the first field after the tag
pub const SHIPMENT_STT_FIELD: usize = 1;

// =============================================================================
// Date Stamps
// =============================================================================

/// Length of a bare date stamp (YYYYMMDD)
pub const DATE_STAMP_LEN: usize = 8;

/// Length of a datetime stamp (YYYYMMDDhhmmss); the time suffix is discarded
pub const DATETIME_STAMP_LEN: usize = 14;

/// chrono format string for the 8-digit date stamp
pub const DATE_STAMP_FORMAT: &str = "%Y%m%d";

/// Marker in file paths that introduces the embedded creation stamp
pub const FILE_STAMP_MARKER: &str = "ce_event.cis.";

/// Epoch year of the coarse day index used by the consistency check
pub const DAY_INDEX_EPOCH_YEAR: i32 = 2014;

/// The coarse day index ignores leap years on purpose
pub const DAY_INDEX_DAYS_PER_YEAR: i64 = 365;

// =============================================================================
// Aggregation Defaults
// =============================================================================

/// Event code whose records feed min-diff tracking unless configured otherwise
pub const DEFAULT_TARGET_EVENT_CODE: &str = "ICBK";

/// STT value recorded for files that could not be read
pub const UNREADABLE_STT: i64 = -1;

// =============================================================================
// Processing Configuration Defaults
// =============================================================================

/// Upper bound for the default number of parallel parse workers
pub const DEFAULT_PARALLEL_WORKERS: usize = 8;

/// Hard cap on configured workers
pub const MAX_PARALLEL_WORKERS: usize = 100;

/// Emit a debug log line every this many scanned directory entries
pub const SCAN_LOG_INTERVAL: usize = 1000;

/// Skip the progress bar for scans smaller than this
pub const PROGRESS_MIN_FILES: usize = 10;

// =============================================================================
// Helper Functions
// =============================================================================

/// Default worker count: available cores, capped
pub fn default_workers() -> usize {
    num_cpus::get().clamp(1, DEFAULT_PARALLEL_WORKERS)
}

/// The zero date recorded when a stamp fails to parse (0001-01-01)
pub fn sentinel_date() -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(1, 1, 1).unwrap()
}
