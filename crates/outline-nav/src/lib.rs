#![warn(missing_docs)]
//! Outline Nav - Structural Navigation over Language-Server Outlines
//!
//! # Overview
//!
//! `outline-nav` moves the caret and selection of a code editor along the structure of the
//! program instead of along characters and lines. The structure comes from an outline tree
//! reported by a language analysis service: classes, methods, widget constructor invocations,
//! their arguments and list literals, each with a source range.
//!
//! The crate is headless. It never owns the document or the editor; hosts plug them in through
//! the [`TextBuffer`], [`EditorView`] and [`OutlineProvider`] traits.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Commands (Navigator)                       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Context Classifier + Cyclic Navigator      │  ← Span sequences
//! ├─────────────────────────────────────────────┤
//! │  Argument Tokenizer                         │  ← Source-text fallback
//! ├─────────────────────────────────────────────┤
//! │  Node Locator + Parent Resolver             │  ← Tree queries
//! ├─────────────────────────────────────────────┤
//! │  Outline Model + Range Geometry             │  ← Data
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use outline_nav::{
//!     EditorSession, EditorView, Element, ElementKind, NavigationCommand, Navigator, OutlineNode,
//!     Position, Range, Selection,
//! };
//!
//! // 0: Column(children: [Text('a'), Text('b')])
//! let text = "Column(children: [Text('a'), Text('b')])";
//! let text_node = |name: &str, start: usize| {
//!     OutlineNode::new(
//!         Element::new(ElementKind::ConstructorInvocation, name),
//!         Range::from_coords(0, start, 0, start + 9),
//!     )
//! };
//! let outline = OutlineNode::new(
//!     Element::new(ElementKind::CompilationUnit, "<unit>"),
//!     Range::from_coords(0, 0, 0, 40),
//! )
//! .with_children(vec![
//!     OutlineNode::new(
//!         Element::new(ElementKind::ConstructorInvocation, "Column"),
//!         Range::from_coords(0, 0, 0, 40),
//!     )
//!     .with_children(vec![
//!         OutlineNode::new(
//!             Element::new(ElementKind::NamedArgument, "children"),
//!             Range::from_coords(0, 7, 0, 39),
//!         )
//!         .with_children(vec![text_node("Text", 18), text_node("Text", 29)]),
//!     ]),
//! ]);
//!
//! let navigator = Navigator::new(Some(outline));
//! let mut editor = EditorSession::new("file:///main.dart", "dart", text)
//!     .with_selection(Selection::caret(Position::new(0, 20)));
//!
//! navigator.execute(NavigationCommand::NextArgument, &mut editor).unwrap();
//! assert_eq!(editor.selected_text(), "Text('b')");
//!
//! navigator.execute(NavigationCommand::Parent, &mut editor).unwrap();
//! assert_eq!(editor.selection(), Selection::caret(Position::new(0, 29)));
//! ```
//!
//! # Module Description
//!
//! - [`geometry`] - positions, ranges, containment and size ranking
//! - [`outline`] - the outline tree model
//! - [`locator`] - node lookup by position or exact range
//! - [`parent`] - parent and ancestor resolution
//! - [`arguments`] - argument-list tokenizer over raw source text
//! - [`context`] - which span sequence a selection navigates
//! - [`cycle`] - wrap-around next/previous over span sequences
//! - [`commands`] - the six user-facing commands
//! - [`config`] - YAML/JSON configuration
//! - [`host`] - traits hosts implement
//! - [`line_index`] - rope-backed [`TextBuffer`]
//! - [`session`] - in-memory [`EditorView`]

pub mod arguments;
pub mod commands;
pub mod config;
pub mod context;
pub mod cycle;
pub mod geometry;
pub mod host;
pub mod line_index;
pub mod locator;
pub mod outline;
pub mod parent;
pub mod selection;
pub mod session;

pub use arguments::{ArgumentSpan, locate_argument_list, tokenize_arguments, tokenize_invocation};
pub use commands::{NavigationCommand, NavigationError, Navigator};
pub use config::{ConfigError, NavigatorConfig};
pub use context::{ChildFilter, ContextKind, NavigationContext, SpanOptions, classify};
pub use cycle::{next_span_index, step};
pub use geometry::{Position, Range, SizeRanking, contains, ranges_equal, size_of};
pub use host::{EditorView, OutlineProvider, TextBuffer};
pub use line_index::LineIndex;
pub use locator::{
    find_all_nodes_of_kind, find_all_nodes_within, find_exact_node, find_node_at_position,
    find_smallest_node, nodes_containing,
};
pub use outline::{Element, ElementKind, OutlineNode};
pub use outline_nav_lang::{ArgumentSyntax, LanguageProfile, builtin_profile, profile_for_path};
pub use parent::{
    find_ancestor, find_ancestor_of_kind, find_enclosing_list, find_nearest_invocation,
    find_parent, is_list_container,
};
pub use selection::{Direction, Selection, Span};
pub use session::EditorSession;
