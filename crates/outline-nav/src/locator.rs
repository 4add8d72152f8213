//! Node lookup by position and range.

use crate::geometry::{Position, Range, contains, ranges_equal};
use crate::outline::{ElementKind, OutlineNode};

/// Find the innermost node whose range contains `pos`.
///
/// Descends from `root` into the first child (in source order) that also contains `pos`, and
/// stops at the first node none of whose children contain it. Returns `None` if `root` itself
/// does not contain `pos`.
///
/// Containment is inclusive, so when a child ends exactly where its next sibling starts, a
/// position on that boundary resolves to the earlier sibling.
pub fn find_node_at_position(root: &OutlineNode, pos: Position) -> Option<&OutlineNode> {
    if !contains(pos, &root.range) {
        return None;
    }

    let mut current = root;
    while let Some(child) = current
        .children
        .iter()
        .find(|child| contains(pos, &child.range))
    {
        current = child;
    }
    Some(current)
}

/// Find the smallest node containing `pos`.
///
/// Under the child-containment invariant "innermost" already is "smallest", so this is the same
/// walk as [`find_node_at_position`].
pub fn find_smallest_node(root: &OutlineNode, pos: Position) -> Option<&OutlineNode> {
    find_node_at_position(root, pos)
}

/// Depth-first search for the node whose range is exactly `start..end`.
///
/// Used to re-identify a node from an existing editor selection.
pub fn find_exact_node(root: &OutlineNode, start: Position, end: Position) -> Option<&OutlineNode> {
    let target = Range::new(start, end);
    if ranges_equal(&root.range, &target) {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_exact_node(child, start, end))
}

/// Collect every node of `kind`, in pre-order.
pub fn find_all_nodes_of_kind<'a>(
    root: &'a OutlineNode,
    kind: &ElementKind,
) -> Vec<&'a OutlineNode> {
    let mut out = Vec::new();
    root.walk_preorder(&mut |node| {
        if node.kind() == kind {
            out.push(node);
        }
    });
    out
}

/// Collect every node whose own range is nested inside `range`, in pre-order.
///
/// Shared endpoints count as nested, so a node whose range equals `range` is included.
pub fn find_all_nodes_within<'a>(root: &'a OutlineNode, range: &Range) -> Vec<&'a OutlineNode> {
    let mut out = Vec::new();
    root.walk_preorder(&mut |node| {
        if range.encloses(&node.range) {
            out.push(node);
        }
    });
    out
}

/// All nodes whose range contains `pos`, outermost first (the root-to-leaf chain).
pub fn nodes_containing(root: &OutlineNode, pos: Position) -> Vec<&OutlineNode> {
    let mut chain = Vec::new();
    if !contains(pos, &root.range) {
        return chain;
    }

    let mut current = root;
    chain.push(current);
    while let Some(child) = current
        .children
        .iter()
        .find(|child| contains(pos, &child.range))
    {
        chain.push(child);
        current = child;
    }
    chain
}
