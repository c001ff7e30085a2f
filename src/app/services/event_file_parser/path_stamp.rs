//! Creation date recovery from file paths
//!
//! CE files do not carry their own creation time. The export process encodes
//! it in the file name as `ce_event.cis.<stamp>`, with the stamp running up
//! to the next dot (or to the end of the path when none follows). The stamp
//! then normalizes like any other date stamp.

use std::path::Path;
use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::constants::FILE_STAMP_MARKER;
use crate::{Error, Result};

use super::dates;

fn stamp_re() -> &'static Regex {
    static STAMP_RE: OnceLock<Regex> = OnceLock::new();
    STAMP_RE
        .get_or_init(|| Regex::new(r"ce_event\.cis\.([^.]*)").expect("valid creation stamp regex"))
}

/// Pull the creation date stamp out of a file path.
///
/// Fails with [`Error::MalformedPath`] when the stamp marker is absent. A
/// present but garbled stamp normalizes to the sentinel date instead.
pub fn extract_creation_date(path: &Path) -> Result<NaiveDate> {
    let text = path.to_string_lossy();

    let captures = stamp_re().captures(&text).ok_or_else(|| {
        Error::malformed_path(
            text.to_string(),
            format!("missing '{}' creation stamp", FILE_STAMP_MARKER),
        )
    })?;

    Ok(dates::normalize_stamp(&captures[1]))
}
