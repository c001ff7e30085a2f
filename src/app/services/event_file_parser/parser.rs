//! File parsing entry point

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::app::models::EventRecord;
use crate::{Error, Result};

use super::classifier;

/// Read one CE interchange file and distill it into an [`EventRecord`].
///
/// Any read failure, including content that does not decode as UTF-8,
/// reports the file as unreadable. Structural problems inside readable
/// content surface as [`Error::MalformedRecord`] or
/// [`Error::MalformedPath`].
pub fn parse_event_file(path: &Path) -> Result<EventRecord> {
    debug!("Parsing event file: {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| Error::unreadable_file(path.display().to_string(), e.to_string()))?;

    classifier::build_record(path, &content)
}
