//! UTF-16 column conversion.
//!
//! Analysis servers report `character` in UTF-16 code units; the engine works in characters.

use outline_nav::{LineIndex, Position};

/// Column conversion between UTF-16 code units and characters.
pub struct LspCoordinateConverter;

impl LspCoordinateConverter {
    /// Character column to UTF-16 column.
    pub fn char_offset_to_utf16(line_text: &str, char_offset: usize) -> usize {
        line_text
            .chars()
            .take(char_offset)
            .map(char::len_utf16)
            .sum()
    }

    /// UTF-16 column to character column. A column inside a surrogate pair rounds up.
    pub fn utf16_to_char_offset(line_text: &str, utf16_offset: usize) -> usize {
        let mut consumed = 0;
        line_text
            .chars()
            .take_while(|ch| {
                let inside = consumed < utf16_offset;
                consumed += ch.len_utf16();
                inside
            })
            .count()
    }

    /// Convert a position with a UTF-16 column into one with a character column.
    pub fn position_from_utf16(
        line_index: &LineIndex,
        line: usize,
        utf16_column: usize,
    ) -> Position {
        let line_text = line_index.line_text(line).unwrap_or_default();
        Position::new(line, Self::utf16_to_char_offset(&line_text, utf16_column))
    }

    /// Convert a position with a character column into one with a UTF-16 column.
    pub fn position_to_utf16(line_index: &LineIndex, pos: Position) -> Position {
        let line_text = line_index.line_text(pos.line).unwrap_or_default();
        Position::new(pos.line, Self::char_offset_to_utf16(&line_text, pos.character))
    }
}
