//! Date stamp normalization and day arithmetic
//!
//! CE interchange files carry timestamps as bare digit stamps: an eight
//! digit date (`YYYYMMDD`) or a fourteen digit datetime (`YYYYMMDDHHMMSS`).
//! Only the calendar day matters for diff reporting, so both forms
//! normalize to a [`NaiveDate`] and anything unparseable collapses to the
//! sentinel date.

use chrono::{Datelike, NaiveDate};

use crate::constants::{
    DATE_STAMP_FORMAT, DATE_STAMP_LEN, DATETIME_STAMP_LEN, DAY_INDEX_DAYS_PER_YEAR,
    DAY_INDEX_EPOCH_YEAR, sentinel_date,
};

/// Normalize a raw digit stamp to a calendar date.
///
/// Fourteen digit datetime stamps are truncated to their leading date part
/// before parsing. Anything that does not read as `YYYYMMDD` afterwards
/// yields the sentinel date, so a garbled stamp degrades the record rather
/// than failing the file.
pub fn normalize_stamp(raw: &str) -> NaiveDate {
    let date_part = if raw.len() == DATETIME_STAMP_LEN {
        raw.get(..DATE_STAMP_LEN).unwrap_or(raw)
    } else {
        raw
    };

    NaiveDate::parse_from_str(date_part, DATE_STAMP_FORMAT).unwrap_or_else(|_| sentinel_date())
}

/// Format a date the way report rows carry it: unpadded `D.M.YYYY`.
pub fn format_short(date: NaiveDate) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// Coarse day index used by the record consistency check.
///
/// Counts days since the start of 2014 with every year taken as 365 days
/// long. Leap days make neighbouring dates share an index; callers compare
/// indices, not exact dates.
pub fn coarse_day_index(date: NaiveDate) -> i64 {
    let years = i64::from(date.year() - DAY_INDEX_EPOCH_YEAR);
    years * DAY_INDEX_DAYS_PER_YEAR + i64::from(date.ordinal())
}
