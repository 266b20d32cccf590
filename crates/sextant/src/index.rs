//! Position index: display-line ordinal to source range, queryable both ways.
//!
//! Ranges use tree-sitter's raw coordinates: 0-based rows and 0-based byte
//! columns. This differs from the rendered outline text, which shows rows 1-based.
//!
//! The index is built once per load and never mutated. Both queries are pure.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A source range in raw tree-sitter coordinates (0-based rows, byte columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceRange {
    /// Starting row (0-indexed)
    pub start_row: usize,
    /// Starting byte column (0-indexed)
    pub start_col: usize,
    /// Ending row (0-indexed, inclusive)
    pub end_row: usize,
    /// Ending byte column (0-indexed; inclusive for containment queries)
    pub end_col: usize,
}

impl SourceRange {
    /// Create a range from its four coordinates.
    #[must_use]
    pub const fn new(start_row: usize, start_col: usize, end_row: usize, end_col: usize) -> Self {
        Self {
            start_row,
            start_col,
            end_row,
            end_col,
        }
    }

    /// Whether the point `(row, col)` lies inside this range.
    ///
    /// The row must be within `[start_row, end_row]`. On the start row the column
    /// must be `>= start_col`, on the end row `<= end_col`; a single-row range
    /// applies both bounds.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        if row < self.start_row || row > self.end_row {
            return false;
        }
        if row == self.start_row && col < self.start_col {
            return false;
        }
        if row == self.end_row && col > self.end_col {
            return false;
        }
        true
    }

    /// Number of rows spanned beyond the first.
    #[must_use]
    pub fn row_span(&self) -> usize {
        self.end_row.saturating_sub(self.start_row)
    }

    /// `end_col - start_col`. Negative for multi-row ranges that end left of where
    /// they start.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Columns are byte offsets within one line
    pub fn col_span(&self) -> i64 {
        self.end_col as i64 - self.start_col as i64
    }

    /// The range as a `(start_row, start_col, end_row, end_col)` tuple.
    #[must_use]
    pub fn as_tuple(&self) -> (usize, usize, usize, usize) {
        (self.start_row, self.start_col, self.end_row, self.end_col)
    }
}

impl From<[usize; 4]> for SourceRange {
    fn from([start_row, start_col, end_row, end_col]: [usize; 4]) -> Self {
        Self::new(start_row, start_col, end_row, end_col)
    }
}

impl From<tree_sitter::Range> for SourceRange {
    fn from(range: tree_sitter::Range) -> Self {
        Self::new(
            range.start_point.row,
            range.start_point.column,
            range.end_point.row,
            range.end_point.column,
        )
    }
}

/// Maps display-line ordinals to the source ranges of their nodes.
///
/// Ordinals produced by the outline serializer are dense (`0..len`), but an index
/// can be built from any set of ordinals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionIndex {
    entries: BTreeMap<usize, SourceRange>,
}

impl PositionIndex {
    /// Build a dense index where entry `i` is `ranges[i]`.
    #[must_use]
    pub fn from_ranges(ranges: impl IntoIterator<Item = SourceRange>) -> Self {
        ranges.into_iter().enumerate().collect()
    }

    /// The most specific entry whose range contains `(row, col)`.
    ///
    /// Candidates are ranked by row span, then column span, then ordinal, so the
    /// earliest entry in traversal order wins a full tie.
    #[must_use]
    pub fn enclosing_entry(&self, row: usize, col: usize) -> Option<usize> {
        self.entries
            .iter()
            .filter(|(_, range)| range.contains(row, col))
            .min_by_key(|&(&ordinal, range)| (range.row_span(), range.col_span(), ordinal))
            .map(|(&ordinal, _)| ordinal)
    }

    /// The source range of entry `index`, or `None` if there is no such entry.
    #[must_use]
    pub fn range_of(&self, index: usize) -> Option<SourceRange> {
        self.entries.get(&index).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, SourceRange)> + '_ {
        self.entries.iter().map(|(&ordinal, &range)| (ordinal, range))
    }
}

impl FromIterator<(usize, SourceRange)> for PositionIndex {
    fn from_iter<I: IntoIterator<Item = (usize, SourceRange)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
