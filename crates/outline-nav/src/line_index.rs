//! Rope-backed document snapshot.
//!
//! Converts between character offsets and `(line, character)` positions, and serves range text
//! to the argument tokenizer. It is the default [`TextBuffer`] for hosts that keep their own
//! buffer elsewhere and only hand the engine a text snapshot.

use crate::geometry::{Position, Range};
use crate::host::TextBuffer;
use ropey::Rope;

/// Immutable text snapshot indexed by line.
///
/// All offsets are character offsets. Out-of-range inputs clamp: a column past the end of its
/// line lands on the line end, a line past the document lands on the document end.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    rope: Rope,
}

impl LineIndex {
    /// Index `text`.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total characters in the document.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Characters on `line`, line terminator (`\n` or `\r\n`) excluded. `0` past the last line.
    pub fn line_width(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut width = slice.len_chars();
        for terminator in ['\n', '\r'] {
            if width > 0 && slice.char(width - 1) == terminator {
                width -= 1;
            }
        }
        width
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> Option<String> {
        (line < self.rope.len_lines()).then(|| {
            let start = self.rope.line_to_char(line);
            self.slice(start, start + self.line_width(line))
        })
    }

    /// Text between two character offsets, in either order.
    pub fn slice(&self, from: usize, to: usize) -> String {
        let len = self.rope.len_chars();
        let (lo, hi) = (from.min(to).min(len), from.max(to).min(len));
        self.rope.slice(lo..hi).to_string()
    }
}

impl TextBuffer for LineIndex {
    fn text_in(&self, range: Range) -> String {
        self.slice(self.offset_at(range.start), self.offset_at(range.end))
    }

    fn offset_at(&self, pos: Position) -> usize {
        if pos.line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(pos.line) + pos.character.min(self.line_width(pos.line))
    }

    fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(offset);
        let column = offset - self.rope.line_to_char(line);
        Position::new(line, column.min(self.line_width(line)))
    }

    fn line_length(&self, line: usize) -> usize {
        self.line_width(line)
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }
}
