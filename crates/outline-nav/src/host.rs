//! Capabilities the navigation engine consumes from its host.
//!
//! The engine never owns the document, the editor or the analysis service. Hosts implement
//! these traits over whatever they already have (an LSP client, an editor widget, a test
//! fixture) and hand them to [`Navigator`](crate::Navigator).

use crate::geometry::{Position, Range};
use crate::outline::OutlineNode;
use crate::selection::Selection;

/// Read-only access to document text.
///
/// Offsets are character (Unicode scalar value) offsets from the start of the document.
pub trait TextBuffer {
    /// Text inside `range`.
    fn text_in(&self, range: Range) -> String;

    /// Character offset of `pos` (clamped to the document).
    fn offset_at(&self, pos: Position) -> usize;

    /// Position of a character offset (clamped to the document).
    fn position_at(&self, offset: usize) -> Position;

    /// Length of `line` in characters, excluding the line terminator.
    fn line_length(&self, line: usize) -> usize;

    /// Number of lines (at least 1).
    fn line_count(&self) -> usize;

    /// The whole-document range.
    fn full_range(&self) -> Range {
        let last = self.line_count().saturating_sub(1);
        Range::new(Position::new(0, 0), Position::new(last, self.line_length(last)))
    }
}

/// The editor the commands act on.
pub trait EditorView {
    /// The document text type.
    type Buffer: TextBuffer;

    /// Identifier the outline provider knows the document by (typically a URI).
    fn document_id(&self) -> &str;

    /// Host language id of the document (e.g. `dart`).
    fn language_id(&self) -> &str;

    /// Document text.
    fn buffer(&self) -> &Self::Buffer;

    /// Current primary selection.
    fn selection(&self) -> Selection;

    /// Replace the primary selection.
    fn set_selection(&mut self, selection: Selection);

    /// Scroll so that `range` is visible.
    fn reveal(&mut self, range: Range);
}

/// Source of outline trees.
///
/// Implementations must return a tree for the document as it is now: the engine calls this once
/// at the start of every command and never keeps the result across commands.
pub trait OutlineProvider {
    /// The current outline of `document_id`, or `None` when it is not available (yet).
    fn outline_for(&self, document_id: &str) -> Option<OutlineNode>;
}

impl<P: OutlineProvider + ?Sized> OutlineProvider for &P {
    fn outline_for(&self, document_id: &str) -> Option<OutlineNode> {
        (**self).outline_for(document_id)
    }
}

/// A fixed outline, handy for hosts that fetch the tree themselves right before a command.
impl OutlineProvider for Option<OutlineNode> {
    fn outline_for(&self, _document_id: &str) -> Option<OutlineNode> {
        self.clone()
    }
}
