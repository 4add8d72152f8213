//! Argument-list tokenizer.
//!
//! Splits the raw text of an invocation's argument list into argument spans without a parser.
//! The outline does not always carry one node per argument, so the argument boundaries are
//! recovered from the source text: nesting depth over `()[]{}` and string-literal state decide
//! which separators are real.
//!
//! The scan is a single left-to-right pass driven by a small state machine:
//!
//! ```text
//!               non-space              ':' (depth 0, name is an identifier)
//! BetweenArgs ───────────► InName ────────────────────────────────────► InValue
//!      ▲                     │  ',' (depth 0)                             │
//!      └─────────────────────┴────────────────────────────────────────────┘
//!
//! InName / InValue ── quote ──► InString ── matching unescaped quote ──► (back)
//! ```
//!
//! A closing delimiter at depth 0 is the end of the list: the scan stops there. Malformed text
//! (unbalanced brackets, unterminated strings) never fails; whatever was scanned becomes the
//! final argument.

use outline_nav_lang::ArgumentSyntax;
use tracing::trace;

/// One argument recovered from argument-list text. Offsets are document character offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpan {
    /// Argument name for `name: value` arguments.
    pub name: Option<String>,
    /// Offset of the name, when present.
    pub name_start: Option<usize>,
    /// Offset of the first value character.
    pub value_start: usize,
    /// Offset just past the last value character.
    pub value_end: usize,
}

impl ArgumentSpan {
    /// Start of the whole argument (the name for named arguments, else the value).
    pub fn start(&self) -> usize {
        self.name_start.unwrap_or(self.value_start)
    }

    /// Returns `true` for positional arguments.
    pub fn is_positional(&self) -> bool {
        self.name.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Name,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BetweenArgs,
    InName,
    InValue,
    InString {
        quote: char,
        escaped: bool,
        resume: Resume,
    },
}

enum Flow {
    Continue,
    Stop,
}

struct Scanner<'a> {
    syntax: &'a ArgumentSyntax,
    chars: Vec<char>,
    base_offset: usize,
    state: ScanState,
    depth: usize,
    arg_start: usize,
    value_start: usize,
    name: Option<(String, usize)>,
    out: Vec<ArgumentSpan>,
}

impl<'a> Scanner<'a> {
    fn new(syntax: &'a ArgumentSyntax, text: &str, base_offset: usize) -> Self {
        Self {
            syntax,
            chars: text.chars().collect(),
            base_offset,
            state: ScanState::BetweenArgs,
            depth: 0,
            arg_start: 0,
            value_start: 0,
            name: None,
            out: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<ArgumentSpan> {
        let mut end = self.chars.len();
        for index in 0..self.chars.len() {
            if let Flow::Stop = self.feed(index, self.chars[index]) {
                end = index;
                break;
            }
        }
        if self.state != ScanState::BetweenArgs {
            self.emit(end);
        }
        self.out
    }

    fn feed(&mut self, index: usize, ch: char) -> Flow {
        match self.state {
            ScanState::BetweenArgs => {
                if ch.is_whitespace() || ch == self.syntax.argument_separator {
                    return Flow::Continue;
                }
                if self.syntax.is_close(ch) {
                    return Flow::Stop;
                }
                self.arg_start = index;
                self.value_start = index;
                self.name = None;
                self.state = ScanState::InName;
                self.feed_argument(index, ch, Resume::Name)
            }
            ScanState::InName => self.feed_argument(index, ch, Resume::Name),
            ScanState::InValue => self.feed_argument(index, ch, Resume::Value),
            ScanState::InString {
                quote,
                escaped,
                resume,
            } => {
                if escaped {
                    self.state = ScanState::InString {
                        quote,
                        escaped: false,
                        resume,
                    };
                } else if Some(ch) == self.syntax.escape {
                    self.state = ScanState::InString {
                        quote,
                        escaped: true,
                        resume,
                    };
                } else if ch == quote {
                    self.state = match resume {
                        Resume::Name => ScanState::InName,
                        Resume::Value => ScanState::InValue,
                    };
                }
                Flow::Continue
            }
        }
    }

    fn feed_argument(&mut self, index: usize, ch: char, resume: Resume) -> Flow {
        if self.syntax.is_quote(ch) {
            self.state = ScanState::InString {
                quote: ch,
                escaped: false,
                resume,
            };
        } else if self.syntax.is_open(ch) {
            self.depth += 1;
        } else if self.syntax.is_close(ch) {
            if self.depth == 0 {
                self.emit(index);
                return Flow::Stop;
            }
            self.depth -= 1;
        } else if self.depth == 0 && ch == self.syntax.argument_separator {
            self.emit(index);
        } else if self.depth == 0 && ch == self.syntax.name_separator && resume == Resume::Name {
            let candidate: String = self.chars[self.arg_start..index].iter().collect();
            let candidate = candidate.trim_end();
            if self.syntax.is_argument_name(candidate) {
                self.name = Some((candidate.to_string(), self.arg_start));
                self.value_start = index + 1;
            }
            self.state = ScanState::InValue;
        }
        Flow::Continue
    }

    fn emit(&mut self, end: usize) {
        let mut start = self.value_start.min(end);
        let mut end = end;
        while start < end && self.chars[start].is_whitespace() {
            start += 1;
        }
        while end > start && self.chars[end - 1].is_whitespace() {
            end -= 1;
        }

        let name = self.name.take();
        self.state = ScanState::BetweenArgs;
        self.depth = 0;
        if start == end && name.is_none() {
            return;
        }

        let span = ArgumentSpan {
            name_start: name.as_ref().map(|(_, at)| self.base_offset + at),
            name: name.map(|(name, _)| name),
            value_start: self.base_offset + start,
            value_end: self.base_offset + end,
        };
        trace!(
            name = span.name.as_deref().unwrap_or(""),
            start = span.value_start,
            end = span.value_end,
            "argument span"
        );
        self.out.push(span);
    }
}

/// Split argument-list text into argument spans.
///
/// `text` starts just after the list's opening delimiter; it may run past the closing delimiter,
/// where the scan stops. `base_offset` is the document character offset of `text`'s first
/// character. An empty list yields an empty vector.
pub fn tokenize_arguments(
    text: &str,
    base_offset: usize,
    syntax: &ArgumentSyntax,
) -> Vec<ArgumentSpan> {
    Scanner::new(syntax, text, base_offset).run()
}

/// Character index just past the opening delimiter of the argument list in `invocation_text`.
///
/// Type arguments (`Foo<Map<String, int>>(..)`) and string literals are skipped. If angle
/// brackets never balance (a comparison, not type arguments), the first unquoted opening
/// delimiter is used.
pub fn locate_argument_list(invocation_text: &str, syntax: &ArgumentSyntax) -> Option<usize> {
    scan_for_list_open(invocation_text, syntax, true)
        .or_else(|| scan_for_list_open(invocation_text, syntax, false))
}

fn scan_for_list_open(text: &str, syntax: &ArgumentSyntax, skip_type_args: bool) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut angle_depth = 0usize;

    for (index, ch) in text.chars().enumerate() {
        if let Some(open_quote) = quote {
            if escaped {
                escaped = false;
            } else if Some(ch) == syntax.escape {
                escaped = true;
            } else if ch == open_quote {
                quote = None;
            }
            continue;
        }

        match syntax.type_arguments {
            Some((open, _)) if skip_type_args && ch == open => {
                angle_depth += 1;
                continue;
            }
            Some((_, close)) if skip_type_args && ch == close => {
                angle_depth = angle_depth.saturating_sub(1);
                continue;
            }
            _ => {}
        }

        if syntax.is_quote(ch) {
            quote = Some(ch);
        } else if ch == syntax.list_open && angle_depth == 0 {
            return Some(index + 1);
        }
    }
    None
}

/// Tokenize the argument list of an invocation whose source text starts at `start_offset`.
pub fn tokenize_invocation(
    invocation_text: &str,
    start_offset: usize,
    syntax: &ArgumentSyntax,
) -> Vec<ArgumentSpan> {
    let Some(list_start) = locate_argument_list(invocation_text, syntax) else {
        return Vec::new();
    };
    let byte_start = invocation_text
        .char_indices()
        .nth(list_start)
        .map(|(byte, _)| byte)
        .unwrap_or(invocation_text.len());
    tokenize_arguments(
        &invocation_text[byte_start..],
        start_offset + list_start,
        syntax,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values<'t>(text: &'t str, spans: &[ArgumentSpan]) -> Vec<(Option<&'t str>, String)> {
        let chars: Vec<char> = text.chars().collect();
        spans
            .iter()
            .map(|span| {
                let name = span.name_start.map(|at| {
                    let byte = text.char_indices().nth(at).map(|(b, _)| b).unwrap();
                    let len = span.name.as_ref().unwrap().len();
                    &text[byte..byte + len]
                });
                let value: String = chars[span.value_start..span.value_end].iter().collect();
                (name, value)
            })
            .collect()
    }

    fn tokenize(text: &str) -> Vec<ArgumentSpan> {
        tokenize_arguments(text, 0, &ArgumentSyntax::dart())
    }

    #[test]
    fn test_named_arguments_with_nesting_and_strings() {
        let text = "a: 1, b: foo(x, y), c: 'it, is a string'";
        let spans = tokenize(text);
        let names: Vec<Option<&str>> = spans.iter().map(|s| s.name.as_deref()).collect();
        assert_eq!(names, vec![Some("a"), Some("b"), Some("c")]);
        assert_eq!(
            values(text, &spans),
            vec![
                (Some("a"), "1".to_string()),
                (Some("b"), "foo(x, y)".to_string()),
                (Some("c"), "'it, is a string'".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize(")").is_empty());
    }

    #[test]
    fn test_unterminated_bracket_is_best_effort() {
        let text = "a: (1, 2";
        let spans = tokenize(text);
        assert_eq!(values(text, &spans), vec![(Some("a"), "(1, 2".to_string())]);
    }

    #[test]
    fn test_unterminated_string_is_best_effort() {
        let text = "'abc, def";
        let spans = tokenize(text);
        assert_eq!(values(text, &spans), vec![(None, "'abc, def".to_string())]);
    }

    #[test]
    fn test_positional_arguments() {
        let text = "'Hello', style: bold, 42 ";
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![
                (None, "'Hello'".to_string()),
                (Some("style"), "bold".to_string()),
                (None, "42".to_string()),
            ]
        );
        assert!(spans[0].is_positional());
    }

    #[test]
    fn test_escaped_quotes_do_not_end_strings() {
        let text = r#"'it\'s, fine', "say \"a, b\"", x"#;
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![
                (None, r"'it\'s, fine'".to_string()),
                (None, r#""say \"a, b\"""#.to_string()),
                (None, "x".to_string()),
            ]
        );
    }

    #[test]
    fn test_other_quote_inside_string_is_literal() {
        let text = r#""it's", b"#;
        assert_eq!(tokenize(text).len(), 2);
    }

    #[test]
    fn test_scan_stops_at_list_close() {
        let text = "a: [1, 2], b: {'k': v}) trailing, stuff";
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![
                (Some("a"), "[1, 2]".to_string()),
                (Some("b"), "{'k': v}".to_string()),
            ]
        );
    }

    #[test]
    fn test_conditional_is_not_a_named_argument() {
        let text = "flag ? a : b, c";
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![(None, "flag ? a : b".to_string()), (None, "c".to_string())]
        );
    }

    #[test]
    fn test_trailing_comma_and_multiline() {
        let text = "\n  child: Text('x'),\n  padding: 8,\n";
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![
                (Some("child"), "Text('x')".to_string()),
                (Some("padding"), "8".to_string()),
            ]
        );
    }

    #[test]
    fn test_offsets_are_shifted_by_base() {
        let spans = tokenize_arguments("a: 1", 100, &ArgumentSyntax::dart());
        assert_eq!(spans[0].name_start, Some(100));
        assert_eq!(spans[0].start(), 100);
        assert_eq!((spans[0].value_start, spans[0].value_end), (103, 104));
    }

    #[test]
    fn test_offsets_count_characters_not_bytes() {
        let text = "label: 'héllo', n: 1";
        let spans = tokenize(text);
        assert_eq!(
            values(text, &spans),
            vec![
                (Some("label"), "'héllo'".to_string()),
                (Some("n"), "1".to_string()),
            ]
        );
        assert_eq!(spans[1].value_start, 19);
    }

    #[test]
    fn test_locate_argument_list() {
        let syntax = ArgumentSyntax::dart();
        assert_eq!(locate_argument_list("Text('a')", &syntax), Some(5));
        assert_eq!(
            locate_argument_list("Foo<Map<String, int>>(x)", &syntax),
            Some(22)
        );
        assert_eq!(locate_argument_list("a < b ? f(x) : y", &syntax), Some(10));
        assert_eq!(locate_argument_list("identifier", &syntax), None);
    }

    #[test]
    fn test_tokenize_invocation() {
        let text = "Padding(padding: EdgeInsets.all(8), child: Text('hi'))";
        let spans = tokenize_invocation(text, 10, &ArgumentSyntax::dart());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].name.as_deref(), Some("padding"));
        assert_eq!(spans[0].name_start, Some(18));
        assert_eq!(spans[1].name.as_deref(), Some("child"));
        assert_eq!((spans[1].value_start, spans[1].value_end), (53, 63));
    }
}
