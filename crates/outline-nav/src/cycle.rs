//! Cyclic stepping through an ordered span sequence.

use crate::geometry::Position;
use crate::selection::{Direction, Selection, Span};

/// Compute the index of the span to select next.
///
/// With an empty selection (a caret), the span "under" the caret is the one whose start is at or
/// before it and whose effective end is after it. The effective end of a span is the start of
/// the following span, so whitespace and separators between two spans belong to the earlier one;
/// the last span ends at its own end, inclusive. Moving forward from a span selects the next one
/// (wrapping); moving backward selects the span itself, revealing its start. A caret outside every
/// span moves forward to the first span starting after it (or the first span) and backward to the
/// last span ending before it (or the last span).
///
/// With a non-empty selection, the selection must match a span exactly; the step is then
/// `i + 1` or `i - 1`, wrapping. A selection that matches no span does not move.
///
/// Returns `None` for an empty sequence or when no movement applies.
pub fn next_span_index(
    spans: &[Span],
    selection: &Selection,
    direction: Direction,
) -> Option<usize> {
    let len = spans.len();
    if len == 0 {
        return None;
    }

    if selection.is_empty() {
        let cursor = selection.active;
        return Some(match (span_under_caret(spans, cursor), direction) {
            (Some(index), Direction::Forward) => (index + 1) % len,
            (Some(index), Direction::Backward) => index,
            (None, Direction::Forward) => spans
                .iter()
                .position(|span| span.start > cursor)
                .unwrap_or(0),
            (None, Direction::Backward) => spans
                .iter()
                .rposition(|span| span.end < cursor)
                .unwrap_or(len - 1),
        });
    }

    let (start, end) = (selection.start(), selection.end());
    let index = spans
        .iter()
        .position(|span| span.start == start && span.end == end)?;
    Some(match direction {
        Direction::Forward => (index + 1) % len,
        Direction::Backward => (index + len - 1) % len,
    })
}

/// Step through `spans` and return the chosen span.
pub fn step<'a>(
    spans: &'a [Span],
    selection: &Selection,
    direction: Direction,
) -> Option<&'a Span> {
    next_span_index(spans, selection, direction).map(|index| &spans[index])
}

fn span_under_caret(spans: &[Span], cursor: Position) -> Option<usize> {
    spans.iter().enumerate().position(|(index, span)| {
        if cursor < span.start {
            return false;
        }
        match spans.get(index + 1) {
            Some(next) => cursor < next.start,
            None => cursor <= span.end,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Foo(a: 1, b: 22, c: 333)
    fn spans() -> Vec<Span> {
        vec![
            Span::named(Position::new(0, 7), Position::new(0, 8), "a"),
            Span::named(Position::new(0, 13), Position::new(0, 15), "b"),
            Span::named(Position::new(0, 20), Position::new(0, 23), "c"),
        ]
    }

    fn caret(character: usize) -> Selection {
        Selection::caret(Position::new(0, character))
    }

    fn select(span: &Span) -> Selection {
        Selection::new(span.start, span.end)
    }

    #[test]
    fn test_empty_sequence_never_moves() {
        assert_eq!(next_span_index(&[], &caret(0), Direction::Forward), None);
    }

    #[test]
    fn test_caret_inside_span_moves_forward() {
        let spans = spans();
        assert_eq!(next_span_index(&spans, &caret(7), Direction::Forward), Some(1));
        assert_eq!(next_span_index(&spans, &caret(21), Direction::Forward), Some(0));
    }

    #[test]
    fn test_gap_after_span_belongs_to_it() {
        let spans = spans();
        // ", b: " between the first and second values.
        assert_eq!(next_span_index(&spans, &caret(10), Direction::Forward), Some(1));
        assert_eq!(next_span_index(&spans, &caret(10), Direction::Backward), Some(0));
        // Start of the second span is the second span.
        assert_eq!(next_span_index(&spans, &caret(13), Direction::Forward), Some(2));
    }

    #[test]
    fn test_backward_from_caret_reveals_current_span() {
        let spans = spans();
        assert_eq!(next_span_index(&spans, &caret(14), Direction::Backward), Some(1));
    }

    #[test]
    fn test_caret_before_all_spans() {
        let spans = spans();
        assert_eq!(next_span_index(&spans, &caret(2), Direction::Forward), Some(0));
        assert_eq!(next_span_index(&spans, &caret(2), Direction::Backward), Some(2));
    }

    #[test]
    fn test_caret_after_all_spans() {
        let spans = spans();
        assert_eq!(next_span_index(&spans, &caret(30), Direction::Forward), Some(0));
        assert_eq!(next_span_index(&spans, &caret(30), Direction::Backward), Some(2));
    }

    #[test]
    fn test_selection_steps_and_wraps() {
        let spans = spans();
        assert_eq!(
            next_span_index(&spans, &select(&spans[2]), Direction::Forward),
            Some(0)
        );
        assert_eq!(
            next_span_index(&spans, &select(&spans[0]), Direction::Backward),
            Some(2)
        );
        assert_eq!(
            next_span_index(&spans, &select(&spans[1]), Direction::Backward),
            Some(0)
        );
    }

    #[test]
    fn test_backward_selection_matches_by_bounds() {
        let spans = spans();
        let reversed = Selection::new(spans[1].end, spans[1].start);
        assert_eq!(next_span_index(&spans, &reversed, Direction::Forward), Some(2));
    }

    #[test]
    fn test_unmatched_selection_does_not_move() {
        let spans = spans();
        let selection = Selection::new(Position::new(0, 0), Position::new(0, 24));
        assert_eq!(next_span_index(&spans, &selection, Direction::Forward), None);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let spans = spans();
        for direction in [Direction::Forward, Direction::Backward] {
            for origin in 0..spans.len() {
                let mut selection = select(&spans[origin]);
                for _ in 0..spans.len() {
                    let span = step(&spans, &selection, direction).unwrap();
                    selection = select(span);
                }
                assert_eq!(selection, select(&spans[origin]));
            }
        }
    }
}
