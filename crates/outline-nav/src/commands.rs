//! Command Interface Layer
//!
//! The six user-facing navigation actions, each a short sequence over the engine:
//! fetch a fresh outline, locate nodes, compute the new selection, apply it.
//!
//! # Example
//!
//! ```rust
//! use outline_nav::{
//!     Element, ElementKind, EditorSession, NavigationCommand, Navigator, OutlineNode, Position,
//!     Range, Selection,
//! };
//!
//! let text = "Text('hi', style: bold)";
//! let outline = OutlineNode::new(
//!     Element::new(ElementKind::CompilationUnit, "<unit>"),
//!     Range::from_coords(0, 0, 0, 23),
//! )
//! .with_children(vec![OutlineNode::new(
//!     Element::new(ElementKind::ConstructorInvocation, "Text")
//!         .with_parameters("('hi', style: bold)"),
//!     Range::from_coords(0, 0, 0, 23),
//! )]);
//!
//! let navigator = Navigator::new(Some(outline));
//! let mut editor = EditorSession::new("file:///main.dart", "dart", text)
//!     .with_selection(Selection::caret(Position::new(0, 6)));
//!
//! navigator.execute(NavigationCommand::NextArgument, &mut editor).unwrap();
//! assert_eq!(editor.selected_text(), "bold");
//! ```

use crate::arguments::locate_argument_list;
use crate::config::NavigatorConfig;
use crate::context::{SpanOptions, classify};
use crate::cycle::next_span_index;
use crate::geometry::Position;
use crate::host::{EditorView, OutlineProvider, TextBuffer};
use crate::locator::{find_exact_node, find_node_at_position, find_smallest_node};
use crate::outline::OutlineNode;
use crate::parent::find_parent;
use crate::selection::{Direction, Selection};
use thiserror::Error;
use tracing::debug;

/// User-invokable navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    /// Caret to the start of the current node, then to its parent's start.
    Parent,
    /// Caret to the preferred child's start, or into the argument list of a leaf.
    Child,
    /// Select the next argument / element / sibling.
    NextArgument,
    /// Select the previous argument / element / sibling.
    PreviousArgument,
    /// Select the node at the caret, or grow the selection to the parent node.
    SelectCurrentBlock,
    /// Caret just inside the argument list of the node at the caret.
    EnterInvocation,
}

impl NavigationCommand {
    /// All commands, in menu order.
    pub const ALL: [NavigationCommand; 6] = [
        NavigationCommand::Parent,
        NavigationCommand::Child,
        NavigationCommand::NextArgument,
        NavigationCommand::PreviousArgument,
        NavigationCommand::SelectCurrentBlock,
        NavigationCommand::EnterInvocation,
    ];

    /// Stable command identifier (`navigate-to-parent`, ...).
    pub fn id(self) -> &'static str {
        match self {
            NavigationCommand::Parent => "navigate-to-parent",
            NavigationCommand::Child => "navigate-to-child",
            NavigationCommand::NextArgument => "navigate-next-argument",
            NavigationCommand::PreviousArgument => "navigate-previous-argument",
            NavigationCommand::SelectCurrentBlock => "select-current-block",
            NavigationCommand::EnterInvocation => "enter-invocation",
        }
    }

    /// Look a command up by [`NavigationCommand::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.id() == id)
    }
}

/// Why a command left the selection unchanged.
///
/// These are expected, frequent conditions during normal editing (caret outside any
/// declaration, outline not computed yet, mid-edit syntax). Hosts should not surface them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The document's language is not enabled.
    #[error("language '{0}' is not enabled for outline navigation")]
    UnsupportedLanguage(String),
    /// The outline provider had no outline for the document.
    #[error("no outline available for the document")]
    OutlineUnavailable,
    /// No outline node contains the caret.
    #[error("no outline node at {line}:{character}")]
    NoNodeAtPosition {
        /// Caret line.
        line: usize,
        /// Caret character.
        character: usize,
    },
    /// The selection does not match any node exactly.
    #[error("selection does not match an outline node")]
    NoExactNode,
    /// The node has no structural parent.
    #[error("node has no parent")]
    NoParent,
    /// The node's text contains no argument list.
    #[error("node has no argument list")]
    NoArgumentList,
    /// No context produced a span to move to.
    #[error("nothing to navigate to")]
    EmptySequence,
}

impl NavigationError {
    /// Every navigation error is an expected no-op, never a failure to report.
    pub fn is_expected(&self) -> bool {
        true
    }

    fn no_node_at(pos: Position) -> Self {
        NavigationError::NoNodeAtPosition {
            line: pos.line,
            character: pos.character,
        }
    }
}

/// Runs navigation commands against an editor, fetching a fresh outline each time.
pub struct Navigator<P> {
    provider: P,
    config: NavigatorConfig,
}

impl<P: OutlineProvider> Navigator<P> {
    /// Create a navigator with the default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, NavigatorConfig::default())
    }

    /// Create a navigator with `config`.
    pub fn with_config(provider: P, config: NavigatorConfig) -> Self {
        Self { provider, config }
    }

    /// Active configuration.
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Outline provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Execute `command`. On success the new selection has been applied (and revealed).
    pub fn execute<E: EditorView>(
        &self,
        command: NavigationCommand,
        editor: &mut E,
    ) -> Result<Selection, NavigationError> {
        let language_id = editor.language_id();
        if !self.config.supports_language(language_id) {
            return Err(NavigationError::UnsupportedLanguage(language_id.to_string()));
        }

        let outline = self
            .provider
            .outline_for(editor.document_id())
            .ok_or(NavigationError::OutlineUnavailable)?;

        let current = editor.selection();
        debug!(
            command = command.id(),
            line = current.active.line,
            character = current.active.character,
            "navigation command"
        );

        let result = match command {
            NavigationCommand::Parent => self.navigate_to_parent(&outline, current),
            NavigationCommand::Child => self.navigate_to_child(&outline, editor, current),
            NavigationCommand::NextArgument => {
                self.navigate_arguments(&outline, editor, current, Direction::Forward)
            }
            NavigationCommand::PreviousArgument => {
                self.navigate_arguments(&outline, editor, current, Direction::Backward)
            }
            NavigationCommand::SelectCurrentBlock => self.select_current_block(&outline, current),
            NavigationCommand::EnterInvocation => {
                self.enter_invocation(&outline, editor, current)
            }
        };

        match result {
            Ok(selection) => {
                editor.set_selection(selection);
                if self.config.reveal {
                    editor.reveal(selection.range());
                }
                Ok(selection)
            }
            Err(err) => {
                debug!(command = command.id(), reason = %err, "navigation no-op");
                Err(err)
            }
        }
    }

    fn navigate_to_parent(
        &self,
        outline: &OutlineNode,
        current: Selection,
    ) -> Result<Selection, NavigationError> {
        let caret = current.active;
        let node = find_node_at_position(outline, caret)
            .ok_or_else(|| NavigationError::no_node_at(caret))?;

        if caret != node.range.start {
            return Ok(Selection::caret(node.range.start));
        }

        let parent = parent_of(outline, node)?;
        Ok(Selection::caret(parent.range.start))
    }

    fn navigate_to_child<E: EditorView>(
        &self,
        outline: &OutlineNode,
        editor: &E,
        current: Selection,
    ) -> Result<Selection, NavigationError> {
        let caret = current.active;
        let node = find_node_at_position(outline, caret)
            .ok_or_else(|| NavigationError::no_node_at(caret))?;

        let preferred = self.config.preferred_child_names.iter().find_map(|name| {
            node.children.iter().find(|child| child.name() == name.as_str())
        });
        match preferred.or_else(|| node.children.first()) {
            Some(child) => Ok(Selection::caret(child.range.start)),
            None => self.caret_inside_argument_list(node, editor),
        }
    }

    fn navigate_arguments<E: EditorView>(
        &self,
        outline: &OutlineNode,
        editor: &E,
        current: Selection,
        direction: Direction,
    ) -> Result<Selection, NavigationError> {
        let options = SpanOptions::from_config(&self.config, editor.language_id());
        let context = classify(outline, editor.buffer(), &current, &options)
            .ok_or(NavigationError::EmptySequence)?;

        let index = next_span_index(&context.spans, &current, direction)
            .ok_or(NavigationError::EmptySequence)?;
        let span = &context.spans[index];
        debug!(
            index,
            of = context.spans.len(),
            name = span.name.as_deref().unwrap_or(""),
            "selected span"
        );
        Ok(Selection::new(span.start, span.end))
    }

    fn select_current_block(
        &self,
        outline: &OutlineNode,
        current: Selection,
    ) -> Result<Selection, NavigationError> {
        if !current.is_empty() {
            let node = find_exact_node(outline, current.start(), current.end())
                .ok_or(NavigationError::NoExactNode)?;
            let parent = parent_of(outline, node)?;
            return Ok(Selection::from_range(parent.range));
        }

        let caret = current.active;
        let node = find_smallest_node(outline, caret)
            .ok_or_else(|| NavigationError::no_node_at(caret))?;
        Ok(Selection::from_range(node.range))
    }

    fn enter_invocation<E: EditorView>(
        &self,
        outline: &OutlineNode,
        editor: &E,
        current: Selection,
    ) -> Result<Selection, NavigationError> {
        let caret = current.active;
        let node = find_node_at_position(outline, caret)
            .ok_or_else(|| NavigationError::no_node_at(caret))?;
        self.caret_inside_argument_list(node, editor)
    }

    fn caret_inside_argument_list<E: EditorView>(
        &self,
        node: &OutlineNode,
        editor: &E,
    ) -> Result<Selection, NavigationError> {
        let buffer = editor.buffer();
        let syntax = NavigatorConfig::argument_syntax(editor.language_id());
        let text = buffer.text_in(node.range);
        let inside = locate_argument_list(&text, &syntax).ok_or(NavigationError::NoArgumentList)?;
        let offset = buffer.offset_at(node.range.start) + inside;
        Ok(Selection::caret(buffer.position_at(offset)))
    }
}

/// Structural parent, excluding a root that resolves to itself.
fn parent_of<'a>(
    outline: &'a OutlineNode,
    node: &OutlineNode,
) -> Result<&'a OutlineNode, NavigationError> {
    find_parent(outline, node)
        .filter(|parent| !std::ptr::eq(*parent, node))
        .ok_or(NavigationError::NoParent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ids_round_trip() {
        for command in NavigationCommand::ALL {
            assert_eq!(NavigationCommand::from_id(command.id()), Some(command));
        }
        assert_eq!(NavigationCommand::from_id("navigate-sideways"), None);
    }

    #[test]
    fn test_errors_are_expected_no_ops() {
        let err = NavigationError::NoNodeAtPosition {
            line: 3,
            character: 7,
        };
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "no outline node at 3:7");
    }
}
