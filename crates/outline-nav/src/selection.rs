//! Editor selection and navigable spans.

use crate::geometry::{Position, Range};

/// Editor selection: a fixed `anchor` and a moving `active` end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// Where the caret is.
    pub active: Position,
}

impl Selection {
    /// Create a selection from `anchor` to `active`.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A caret (empty selection) at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// A forward selection covering `range`.
    pub fn from_range(range: Range) -> Self {
        Self::new(range.start, range.end)
    }

    /// Returns `true` if anchor and active end coincide.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// The smaller endpoint.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The larger endpoint.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Ordered selection bounds as a range.
    pub fn range(&self) -> Range {
        Range::new(self.start(), self.end())
    }
}

/// A transient navigable range, optionally named (e.g. a named argument's value).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Span start.
    pub start: Position,
    /// Span end.
    pub end: Position,
    /// Argument name, if any.
    pub name: Option<String>,
}

impl Span {
    /// Create an unnamed span.
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            name: None,
        }
    }

    /// Create a named span.
    pub fn named(start: Position, end: Position, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: Some(name.into()),
        }
    }

    /// The span as a range.
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }
}

impl From<Range> for Span {
    fn from(range: Range) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Navigation direction through a span sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards later spans.
    Forward,
    /// Towards earlier spans.
    Backward,
}
