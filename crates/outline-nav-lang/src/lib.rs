#![warn(missing_docs)]
//! `outline-nav-lang` - data-driven language profiles for `outline-nav`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any parser. It provides
//! small structs that describe how argument lists are written in a language, so the navigation
//! engine can re-tokenize invocation text without knowing the language's grammar.

/// Lexical description of an argument list (`(a: 1, b: [2, 3])`).
///
/// The tokenizer in `outline-nav` only needs to know which characters nest, which characters
/// start string literals, and which characters separate names from values and arguments from
/// each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSyntax {
    /// Opening delimiters, paired by index with [`ArgumentSyntax::close`].
    pub open: Vec<char>,
    /// Closing delimiters, paired by index with [`ArgumentSyntax::open`].
    pub close: Vec<char>,
    /// Characters that start (and end) a string literal.
    pub quotes: Vec<char>,
    /// Escape character inside string literals.
    pub escape: Option<char>,
    /// Separator between an argument name and its value (e.g. `:`).
    pub name_separator: char,
    /// Separator between arguments (e.g. `,`).
    pub argument_separator: char,
    /// Delimiter that opens an invocation's argument list (e.g. `(`).
    pub list_open: char,
    /// Delimiters wrapping type arguments that precede the argument list (e.g. `<` / `>`).
    pub type_arguments: Option<(char, char)>,
}

impl ArgumentSyntax {
    /// Argument syntax shared by C-family languages with `name: value` named arguments (Dart).
    pub fn dart() -> Self {
        Self {
            open: vec!['(', '[', '{'],
            close: vec![')', ']', '}'],
            quotes: vec!['\'', '"'],
            escape: Some('\\'),
            name_separator: ':',
            argument_separator: ',',
            list_open: '(',
            type_arguments: Some(('<', '>')),
        }
    }

    /// Returns `true` if `ch` opens a nesting level.
    pub fn is_open(&self, ch: char) -> bool {
        self.open.contains(&ch)
    }

    /// Returns `true` if `ch` closes a nesting level.
    pub fn is_close(&self, ch: char) -> bool {
        self.close.contains(&ch)
    }

    /// Returns `true` if `ch` starts a string literal.
    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    /// Returns `true` if `ch` may appear in an argument name.
    pub fn is_name_char(&self, ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    /// Returns `true` if `text` is a plain argument name (identifier).
    pub fn is_argument_name(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) if !first.is_ascii_digit() && self.is_name_char(first) => {
                chars.all(|ch| self.is_name_char(ch))
            }
            _ => false,
        }
    }
}

impl Default for ArgumentSyntax {
    fn default() -> Self {
        Self::dart()
    }
}

/// A language the navigation commands are enabled for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Host language id (e.g. `dart`).
    pub id: String,
    /// File extensions (without the dot) associated with the language.
    pub extensions: Vec<String>,
    /// Argument-list syntax.
    pub arguments: ArgumentSyntax,
}

impl LanguageProfile {
    /// The Dart / Flutter profile.
    pub fn dart() -> Self {
        Self {
            id: "dart".to_string(),
            extensions: vec!["dart".to_string()],
            arguments: ArgumentSyntax::dart(),
        }
    }

    /// Returns `true` if `path` ends with one of this profile's extensions.
    pub fn matches_path(&self, path: &str) -> bool {
        path.rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.iter().any(|e| e == ext))
    }
}

/// Resolve a built-in profile by language id.
pub fn builtin_profile(id: &str) -> Option<LanguageProfile> {
    match id {
        "dart" => Some(LanguageProfile::dart()),
        _ => None,
    }
}

/// Resolve a built-in profile from a file path's extension.
pub fn profile_for_path(path: &str) -> Option<LanguageProfile> {
    [LanguageProfile::dart()]
        .into_iter()
        .find(|profile| profile.matches_path(path))
}
