//! Line classification and record assembly
//!
//! A CE file is a sequence of delimited records, one per line, each opening
//! with a record tag. Classification keeps the last header and event line
//! seen and the shipment identifier from the last shipment line, which is
//! how repeated records are meant to be read: later records supersede
//! earlier ones.

use std::path::Path;

use tracing::warn;

use crate::app::models::EventRecord;
use crate::constants::{
    EVENT_CODE_FIELD, EVENT_TIME_FIELD, HEADER_CREATION_DATE_FIELD, RECORD_TAG_EVENT,
    RECORD_TAG_HEADER, RECORD_TAG_SHIPMENT, SHIPMENT_STT_FIELD,
};
use crate::{Error, Result};

use super::{dates, fields, path_stamp};

/// Outcome of scanning a file's lines for the records of interest.
#[derive(Debug, Default, PartialEq)]
pub struct ClassifiedLines<'a> {
    /// Last `CEHEADER02` line, if any
    pub header: Option<&'a str>,
    /// Last `CEEVTSHP04` line, if any
    pub event: Option<&'a str>,
    /// Shipment identifier from the last parseable `CESHP___04` line
    pub stt: i64,
}

/// Scan file content line by line and pick out the records of interest.
///
/// A shipment line whose identifier field is missing or unparseable is
/// logged and skipped, keeping the previously seen identifier (zero when
/// none parsed yet).
pub fn classify(content: &str) -> ClassifiedLines<'_> {
    let mut classified = ClassifiedLines::default();

    for line in content.lines() {
        if line.starts_with(RECORD_TAG_HEADER) {
            classified.header = Some(line);
        } else if line.starts_with(RECORD_TAG_SHIPMENT) {
            match fields::field_at(line, SHIPMENT_STT_FIELD) {
                Some(raw) => match raw.parse::<i64>() {
                    Ok(stt) => classified.stt = stt,
                    Err(_) => warn!(
                        "unparseable shipment identifier '{}', keeping {}",
                        raw, classified.stt
                    ),
                },
                None => warn!("shipment record carries no identifier field"),
            }
        } else if line.starts_with(RECORD_TAG_EVENT) {
            classified.event = Some(line);
        }
    }

    classified
}

/// Assemble an [`EventRecord`] from one file's path and content.
///
/// The file creation date comes from the path stamp, everything else from
/// the classified header and event lines. A file missing either line, or a
/// required field on one, is malformed.
pub fn build_record(path: &Path, content: &str) -> Result<EventRecord> {
    let file_creation_time = path_stamp::extract_creation_date(path)?;

    let classified = classify(content);

    let header = classified.header.ok_or_else(|| {
        Error::malformed_record(
            path.display().to_string(),
            format!("no {} record", RECORD_TAG_HEADER),
        )
    })?;
    let event = classified.event.ok_or_else(|| {
        Error::malformed_record(
            path.display().to_string(),
            format!("no {} record", RECORD_TAG_EVENT),
        )
    })?;

    let header_creation_time =
        dates::normalize_stamp(require_field(path, header, "header", HEADER_CREATION_DATE_FIELD)?);
    let event_code = require_field(path, event, "event", EVENT_CODE_FIELD)?.to_string();
    let event_time = dates::normalize_stamp(require_field(path, event, "event", EVENT_TIME_FIELD)?);

    Ok(EventRecord::new(
        classified.stt,
        file_creation_time,
        event_time,
        header_creation_time,
        event_code,
    ))
}

fn require_field<'a>(path: &Path, line: &'a str, label: &str, position: usize) -> Result<&'a str> {
    fields::field_at(line, position).ok_or_else(|| {
        Error::malformed_record(
            path.display().to_string(),
            format!("{} record missing field {}", label, position),
        )
    })
}
