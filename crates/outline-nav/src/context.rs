//! Navigation-context classification.
//!
//! For a caret or selection, decides which sequence of spans "next/previous argument" cycles
//! through, and which outline node anchors it:
//!
//! 1. **Invocation arguments**: the innermost invocation enclosing the caret. Arguments come from
//!    re-tokenizing the invocation's source text when the server reports parameter text, else
//!    from its argument children.
//! 2. **List elements**: the innermost node whose children are all list-element kinds
//!    (invocations, identifiers), e.g. a list literal or a `children:` argument.
//! 3. **Container children**: the structural parent of the node at the caret, with its children
//!    filtered by an allow-list chosen from the parent's kind.
//!
//! Invocation arguments win over list elements. An invocation that exposes no arguments at all
//! (no parameter text, no argument children) yields to the list around it. Once a context is
//! chosen it is final: an empty span sequence makes the command a no-op. With a non-empty
//! selection, a later context whose spans contain the selection exactly is preferred, so that a
//! selected element keeps cycling in its own sequence.

use crate::arguments::tokenize_invocation;
use crate::config::NavigatorConfig;
use crate::geometry::{Position, Range, SizeRanking};
use crate::host::TextBuffer;
use crate::locator::{find_all_nodes_within, find_exact_node, find_smallest_node};
use crate::outline::{ElementKind, OutlineNode};
use crate::parent::{CHILDREN_ARGUMENT, find_parent};
use crate::selection::{Selection, Span};
use outline_nav_lang::ArgumentSyntax;
use tracing::debug;

/// Which of the three contexts produced a span sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// Arguments of the innermost enclosing invocation.
    InvocationArguments,
    /// Elements of the innermost enclosing list.
    ListElements,
    /// Allowed children of the structural parent.
    ContainerChildren,
}

/// The chosen context, its anchor node and the spans to cycle through.
#[derive(Debug, Clone)]
pub struct NavigationContext<'a> {
    /// Context kind.
    pub kind: ContextKind,
    /// The node whose (derived) children form `spans`.
    pub anchor: &'a OutlineNode,
    /// Ordered spans.
    pub spans: Vec<Span>,
}

/// Inputs that shape span production.
#[derive(Debug, Clone)]
pub struct SpanOptions {
    /// Argument-list syntax used by the tokenizer.
    pub syntax: ArgumentSyntax,
    /// Ranking used to pick the innermost candidate.
    pub ranking: SizeRanking,
    /// Cover `name: value` instead of the value alone.
    pub include_argument_names: bool,
}

impl SpanOptions {
    /// Options for a document in `language_id`.
    pub fn from_config(config: &NavigatorConfig, language_id: &str) -> Self {
        Self {
            syntax: NavigatorConfig::argument_syntax(language_id),
            ranking: config.ranking,
            include_argument_names: config.include_argument_names,
        }
    }
}

impl Default for SpanOptions {
    fn default() -> Self {
        Self::from_config(&NavigatorConfig::default(), "dart")
    }
}

/// Children a container parent exposes to navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildFilter {
    /// Named and positional arguments.
    Arguments,
    /// Class members and top-level declarations.
    Declarations,
    /// Every child.
    All,
}

impl ChildFilter {
    /// Allow-list for the children of a parent of `kind`.
    pub fn for_parent(kind: &ElementKind) -> Self {
        match kind {
            ElementKind::ConstructorInvocation | ElementKind::MethodInvocation => Self::Arguments,
            ElementKind::CompilationUnit
            | ElementKind::ClassDeclaration
            | ElementKind::FieldDeclaration
            | ElementKind::MethodDeclaration
            | ElementKind::ConstructorDeclaration
            | ElementKind::FunctionDeclaration => Self::Declarations,
            ElementKind::ListLiteral
            | ElementKind::NamedArgument
            | ElementKind::PositionalArgument
            | ElementKind::Identifier
            | ElementKind::Other(_) => Self::All,
        }
    }

    /// Returns `true` if `child` passes the filter.
    pub fn accepts(self, child: &OutlineNode) -> bool {
        match self {
            Self::Arguments => child.kind().is_argument(),
            Self::Declarations => child.kind().is_declaration(),
            Self::All => true,
        }
    }
}

/// The region a selection probes: the caret itself, or the selected range.
fn probe_of(selection: &Selection) -> Range {
    selection.range()
}

/// A candidate encloses the probe; a non-empty selection must not be the candidate itself.
fn encloses_probe(candidate: &Range, probe: &Range) -> bool {
    candidate.encloses(probe) && (probe.is_empty() || candidate != probe)
}

/// The innermost invocation enclosing `probe`.
///
/// Candidates are every invocation within `document_range`; the smallest (per `ranking`) wins,
/// earlier nodes winning ties.
pub fn invocation_anchor<'a>(
    root: &'a OutlineNode,
    document_range: &Range,
    probe: &Range,
    ranking: SizeRanking,
) -> Option<&'a OutlineNode> {
    find_all_nodes_within(root, document_range)
        .into_iter()
        .filter(|node| node.kind().is_invocation() && encloses_probe(&node.range, probe))
        .min_by(|a, b| ranking.compare(&a.range, &b.range))
}

/// Returns `true` if `node` has children and every child is a list-element kind.
pub fn is_list_anchor(node: &OutlineNode) -> bool {
    !node.children.is_empty()
        && node
            .children
            .iter()
            .all(|child| child.kind().is_list_element())
}

/// The innermost list anchor enclosing `probe`.
pub fn list_anchor<'a>(
    root: &'a OutlineNode,
    document_range: &Range,
    probe: &Range,
    ranking: SizeRanking,
) -> Option<&'a OutlineNode> {
    find_all_nodes_within(root, document_range)
        .into_iter()
        .filter(|node| is_list_anchor(node) && encloses_probe(&node.range, probe))
        .min_by(|a, b| ranking.compare(&a.range, &b.range))
}

/// The structural parent used by the container fallback.
///
/// With a non-empty selection the selected node is re-identified by its exact range; otherwise
/// (or when nothing matches exactly) the smallest node at the selection start is used.
pub fn container_anchor<'a>(
    root: &'a OutlineNode,
    selection: &Selection,
) -> Option<&'a OutlineNode> {
    let node = if selection.is_empty() {
        find_smallest_node(root, selection.active)
    } else {
        find_exact_node(root, selection.start(), selection.end())
            .or_else(|| find_smallest_node(root, selection.start()))
    }?;
    find_parent(root, node).filter(|parent| !std::ptr::eq(*parent, node))
}

/// Argument spans of an invocation.
pub fn invocation_spans<B: TextBuffer + ?Sized>(
    invocation: &OutlineNode,
    buffer: &B,
    options: &SpanOptions,
) -> Vec<Span> {
    if invocation.element.parameters.is_none() {
        return invocation
            .children
            .iter()
            .filter(|child| child.kind().is_argument())
            .map(|child| Span {
                start: child.range.start,
                end: child.range.end,
                name: matches!(child.kind(), ElementKind::NamedArgument)
                    .then(|| child.name().to_string()),
            })
            .collect();
    }

    let text = buffer.text_in(invocation.range);
    let start_offset = buffer.offset_at(invocation.range.start);
    tokenize_invocation(&text, start_offset, &options.syntax)
        .into_iter()
        .map(|arg| {
            let start = if options.include_argument_names {
                arg.start()
            } else {
                arg.value_start
            };
            Span {
                start: buffer.position_at(start),
                end: buffer.position_at(arg.value_end),
                name: arg.name,
            }
        })
        .collect()
}

/// Element spans of a list anchor, in tree order.
pub fn list_spans(list: &OutlineNode) -> Vec<Span> {
    list.children
        .iter()
        .map(|child| Span::from(child.range))
        .collect()
}

/// Allowed child spans of a container parent.
pub fn container_spans(parent: &OutlineNode) -> Vec<Span> {
    let filter = ChildFilter::for_parent(parent.kind());
    parent
        .children
        .iter()
        .filter(|child| filter.accepts(child))
        .map(|child| Span {
            start: child.range.start,
            end: child.range.end,
            name: Some(child.name().to_string()).filter(|name| !name.is_empty()),
        })
        .collect()
}

/// Returns `true` if `pos` lies inside `node`'s `children:` argument.
pub fn in_children_argument(node: &OutlineNode, pos: Position) -> bool {
    node.children.iter().any(|child| {
        matches!(child.kind(), ElementKind::NamedArgument)
            && child.name() == CHILDREN_ARGUMENT
            && child.contains(pos)
    })
}

/// Returns `true` if `invocation` has arguments to navigate, from parameter text or children.
pub fn exposes_arguments(invocation: &OutlineNode) -> bool {
    invocation.element.parameters.is_some()
        || invocation
            .children
            .iter()
            .any(|child| child.kind().is_argument())
}

/// Classify the selection and produce the span sequence to navigate.
///
/// Returns `None` when no context applies or the chosen context has no spans. With a non-empty
/// selection, the first context (in priority order) whose spans contain the selection exactly
/// is chosen; when none does, the highest-priority context is returned.
pub fn classify<'a, B: TextBuffer + ?Sized>(
    root: &'a OutlineNode,
    buffer: &B,
    selection: &Selection,
    options: &SpanOptions,
) -> Option<NavigationContext<'a>> {
    let probe = probe_of(selection);
    let document_range = buffer.full_range();

    let mut candidates: Vec<(ContextKind, &'a OutlineNode)> = Vec::with_capacity(3);
    candidates.extend(
        invocation_anchor(root, &document_range, &probe, options.ranking)
            .filter(|node| exposes_arguments(node))
            .map(|node| (ContextKind::InvocationArguments, node)),
    );
    candidates.extend(
        list_anchor(root, &document_range, &probe, options.ranking)
            .map(|node| (ContextKind::ListElements, node)),
    );
    if candidates.is_empty() {
        candidates.extend(
            container_anchor(root, selection).map(|node| (ContextKind::ContainerChildren, node)),
        );
    }

    let mut chosen: Option<NavigationContext<'a>> = None;
    for (kind, anchor) in candidates {
        let spans = match kind {
            ContextKind::InvocationArguments => invocation_spans(anchor, buffer, options),
            ContextKind::ListElements => list_spans(anchor),
            ContextKind::ContainerChildren => container_spans(anchor),
        };
        let context = NavigationContext {
            kind,
            anchor,
            spans,
        };
        if selection.is_empty() || selection_matches_a_span(selection, &context.spans) {
            chosen = Some(context);
            break;
        }
        if chosen.is_none() {
            chosen = Some(context);
        }
    }

    let context = chosen?;
    debug!(
        context = ?context.kind,
        anchor = context.anchor.name(),
        spans = context.spans.len(),
        "navigation context"
    );
    (!context.spans.is_empty()).then_some(context)
}

fn selection_matches_a_span(selection: &Selection, spans: &[Span]) -> bool {
    let (start, end) = (selection.start(), selection.end());
    spans.iter().any(|span| span.start == start && span.end == end)
}
