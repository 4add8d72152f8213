//! Range geometry.
//!
//! Pure predicates over `(line, character)` positions and ranges. Containment is inclusive of
//! both endpoints: a position sitting exactly on a child's end (which is often also an ancestor's
//! end) is contained by both.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Position coordinates (zero-based line and character).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based character (Unicode scalar) offset within the line.
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.character.cmp(&other.character))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A `(start, end)` range in `(line, character)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Range start position.
    pub start: Position,
    /// Range end position.
    pub end: Position,
}

impl Range {
    /// Create a new range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Shorthand for `Range::new(Position::new(..), Position::new(..))`.
    pub fn from_coords(
        start_line: usize,
        start_character: usize,
        end_line: usize,
        end_character: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_character),
            Position::new(end_line, end_character),
        )
    }

    /// An empty range at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// Returns `true` if `start == end`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `pos` lies within this range (both endpoints inclusive).
    pub fn contains(&self, pos: Position) -> bool {
        contains(pos, self)
    }

    /// Returns `true` if `other` is nested inside this range (shared endpoints allowed).
    pub fn encloses(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Returns `true` iff `pos` is not before `range.start` and not after `range.end`.
pub fn contains(pos: Position, range: &Range) -> bool {
    range.start <= pos && pos <= range.end
}

/// Exact field equality on start and end.
pub fn ranges_equal(a: &Range, b: &Range) -> bool {
    a.start == b.start && a.end == b.end
}

/// Line weight used by [`size_of`].
///
/// Must exceed the longest line the host is expected to hold.
pub const SIZE_LINE_WEIGHT: usize = 100_000;

/// Approximate size of a range: `(end_line - start_line) * K + (end_char - start_char)`.
///
/// This is only a total-order proxy used to rank candidate ranges "smallest first". It is not a
/// geometric area, and it misranks ranges whose terminal line is more than
/// [`SIZE_LINE_WEIGHT`] characters away from the start column. Character deltas may be negative
/// for multi-line ranges, hence the signed result.
pub fn size_of(range: &Range) -> i64 {
    let lines = range.end.line as i64 - range.start.line as i64;
    let chars = range.end.character as i64 - range.start.character as i64;
    lines * SIZE_LINE_WEIGHT as i64 + chars
}

/// How candidate ranges are ranked when the engine needs the innermost one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeRanking {
    /// Compare line span first, then character span. Never misranks nested ranges.
    #[default]
    Exact,
    /// Compare [`size_of`] values.
    Approximate,
}

impl SizeRanking {
    /// Compare two ranges by size, smallest first.
    pub fn compare(self, a: &Range, b: &Range) -> Ordering {
        match self {
            SizeRanking::Approximate => size_of(a).cmp(&size_of(b)),
            SizeRanking::Exact => {
                let a_lines = a.end.line.saturating_sub(a.start.line);
                let b_lines = b.end.line.saturating_sub(b.start.line);
                let a_chars = a.end.character as i64 - a.start.character as i64;
                let b_chars = b.end.character as i64 - b.start.character as i64;
                a_lines.cmp(&b_lines).then_with(|| a_chars.cmp(&b_chars))
            }
        }
    }
}
