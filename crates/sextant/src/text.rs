//! Converting index coordinates into text offsets.
//!
//! Index columns are byte offsets within a row, but text widgets address
//! characters. A row's bytes up to the column are decoded (lossily, so a column
//! that falls inside a multi-byte character still yields an offset) and the
//! decoded characters are counted.

use std::ops::Range;

use crate::index::SourceRange;

/// Byte offset of `(row, byte_col)` in `source`, with the column clamped to the
/// row's end.
fn byte_offset(source: &[u8], row: usize, byte_col: usize) -> Option<usize> {
    let mut row_start = 0;
    for (current, line) in source.split(|&b| b == b'\n').enumerate() {
        if current == row {
            return Some(row_start + byte_col.min(line.len()));
        }
        // +1 for the newline separator
        row_start += line.len() + 1;
    }
    None
}

/// Linear character offset of `(row, byte_col)` in `source`.
///
/// `source` is the exact bytes the tree was parsed from, so columns line up
/// even when it is not valid UTF-8; each invalid sequence counts as one
/// replacement character. Rows are separated by `\n`. A column past the end of
/// its row is clamped to the row's end. Returns `None` if `row` does not exist.
#[must_use]
pub fn char_offset(source: impl AsRef<[u8]>, row: usize, byte_col: usize) -> Option<usize> {
    let source = source.as_ref();
    let end = byte_offset(source, row, byte_col)?;
    Some(String::from_utf8_lossy(&source[..end]).chars().count())
}

/// Character offsets of both ends of `range` in `source`.
#[must_use]
pub fn char_range(source: impl AsRef<[u8]>, range: SourceRange) -> Option<Range<usize>> {
    let source = source.as_ref();
    let start = char_offset(source, range.start_row, range.start_col)?;
    let end = char_offset(source, range.end_row, range.end_col)?;
    Some(start..end)
}

/// The text `range` covers in `source`, lossily decoded.
#[must_use]
pub fn slice(source: impl AsRef<[u8]>, range: SourceRange) -> Option<String> {
    let source = source.as_ref();
    let start = byte_offset(source, range.start_row, range.start_col)?;
    let end = byte_offset(source, range.end_row, range.end_col)?;
    let bytes = source.get(start..end.max(start))?;
    Some(String::from_utf8_lossy(bytes).into_owned())
}
