//! Positional field access for delimited record lines
//!
//! Every CE record line opens with a ten character record tag, a one byte
//! separator (an underscore in well formed files), then the record body.
//! Body fields are pipe-delimited and addressed by one-based position.

use crate::constants::{FIELD_DELIMITER, RECORD_TAG_LEN};

/// Strip the record tag and its separator, returning the field body.
///
/// The byte after the tag is the record separator; it is skipped, not
/// validated. Returns `None` when the line ends at or inside the tag, or
/// when the skip would split a multi-byte character.
pub fn record_body(line: &str) -> Option<&str> {
    line.get(RECORD_TAG_LEN + 1..)
}

/// Return the field at a one-based position inside a record line.
///
/// Position zero addresses the record tag itself and always yields `None`;
/// so does any position past the last field. The final field runs to the
/// end of the line, and empty fields between adjacent delimiters are
/// preserved.
pub fn field_at(line: &str, position: usize) -> Option<&str> {
    if position == 0 {
        return None;
    }

    record_body(line)?.split(FIELD_DELIMITER).nth(position - 1)
}
