//! In-memory editor session.

use crate::geometry::{Position, Range};
use crate::host::{EditorView, TextBuffer};
use crate::line_index::LineIndex;
use crate::selection::Selection;

/// A minimal [`EditorView`]: one document, one selection, and the last revealed range.
pub struct EditorSession {
    document_id: String,
    language_id: String,
    buffer: LineIndex,
    selection: Selection,
    revealed: Option<Range>,
}

impl EditorSession {
    /// Open `text` as `document_id` in `language_id`, with a caret at the document start.
    pub fn new(
        document_id: impl Into<String>,
        language_id: impl Into<String>,
        text: &str,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            language_id: language_id.into(),
            buffer: LineIndex::from_text(text),
            selection: Selection::caret(Position::new(0, 0)),
            revealed: None,
        }
    }

    /// Builder-style initial selection.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Place a caret at `pos`.
    pub fn set_caret(&mut self, pos: Position) {
        self.selection = Selection::caret(pos);
    }

    /// The last range passed to [`EditorView::reveal`].
    pub fn revealed(&self) -> Option<Range> {
        self.revealed
    }

    /// Text currently selected.
    pub fn selected_text(&self) -> String {
        self.buffer.text_in(self.selection.range())
    }
}

impl EditorView for EditorSession {
    type Buffer = LineIndex;

    fn document_id(&self) -> &str {
        &self.document_id
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn buffer(&self) -> &LineIndex {
        &self.buffer
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    fn reveal(&mut self, range: Range) {
        self.revealed = Some(range);
    }
}
