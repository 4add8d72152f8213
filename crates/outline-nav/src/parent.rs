//! Structural parent and ancestor resolution.
//!
//! Parents are resolved by searching from the root rather than by stored back-links: the outline
//! is rebuilt for every command, so a node may have been re-derived from a fresh tree. A node is
//! a child of `p` when one of `p`'s children starts where the node starts.

use crate::outline::{ElementKind, OutlineNode};

/// Name of the named argument that holds a widget's child list.
pub const CHILDREN_ARGUMENT: &str = "children";

/// Find the structural parent of `node` under `root`.
///
/// Returns `root` if one of its direct children starts at `node`'s start, otherwise the first
/// match found in the children (pre-order). `None` when no node has a child starting there,
/// which is the case for a node outside the tree and for a root that does not share its start
/// with its first child.
pub fn find_parent<'a>(root: &'a OutlineNode, node: &OutlineNode) -> Option<&'a OutlineNode> {
    let start = node.range.start;
    if root.children.iter().any(|child| child.range.start == start) {
        return Some(root);
    }
    root.children
        .iter()
        .find_map(|child| find_parent(child, node))
}

/// Walk upward from `node` and return the first ancestor of `kind` (and `name`, if given).
pub fn find_ancestor_of_kind<'a>(
    root: &'a OutlineNode,
    node: &OutlineNode,
    kind: &ElementKind,
    name: Option<&str>,
) -> Option<&'a OutlineNode> {
    find_ancestor(root, node, |ancestor| {
        ancestor.kind() == kind && name.is_none_or(|name| ancestor.name() == name)
    })
}

/// Walk upward from `node` and return the first ancestor matching `predicate`.
pub fn find_ancestor<'a>(
    root: &'a OutlineNode,
    node: &OutlineNode,
    mut predicate: impl FnMut(&OutlineNode) -> bool,
) -> Option<&'a OutlineNode> {
    let mut current = find_parent(root, node)?;
    loop {
        if predicate(current) {
            return Some(current);
        }
        // A node sharing its start with its first child resolves to itself.
        let parent = find_parent(root, current)?;
        if std::ptr::eq(parent, current) {
            return None;
        }
        current = parent;
    }
}

/// Nearest ancestor that holds a list of siblings: a list literal or a `children` argument.
pub fn find_enclosing_list<'a>(
    root: &'a OutlineNode,
    node: &OutlineNode,
) -> Option<&'a OutlineNode> {
    find_ancestor(root, node, is_list_container)
}

/// Walk upward from `node` (inclusive) to the first invocation.
///
/// The walk stops at a `children` argument: an invocation above a child list owns the list, not
/// the element the walk started from.
pub fn find_nearest_invocation<'a>(
    root: &'a OutlineNode,
    node: &'a OutlineNode,
) -> Option<&'a OutlineNode> {
    let mut current = node;
    loop {
        if current.kind().is_invocation() {
            return Some(current);
        }
        let parent = find_parent(root, current)?;
        if is_children_argument(parent) || std::ptr::eq(parent, current) {
            return None;
        }
        current = parent;
    }
}

/// `true` for list literals and `children:` named arguments.
pub fn is_list_container(node: &OutlineNode) -> bool {
    matches!(node.kind(), ElementKind::ListLiteral) || is_children_argument(node)
}

fn is_children_argument(node: &OutlineNode) -> bool {
    matches!(node.kind(), ElementKind::NamedArgument) && node.name() == CHILDREN_ARGUMENT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Range;
    use crate::outline::Element;

    fn node(
        kind: ElementKind,
        name: &str,
        range: Range,
        children: Vec<OutlineNode>,
    ) -> OutlineNode {
        OutlineNode::new(Element::new(kind, name), range).with_children(children)
    }

    // Column(children: [Text('a'), Padding(child: Text('b'))])
    fn sample() -> OutlineNode {
        node(
            ElementKind::CompilationUnit,
            "<unit>",
            Range::from_coords(0, 0, 0, 60),
            vec![node(
                ElementKind::ConstructorInvocation,
                "Column",
                Range::from_coords(0, 0, 0, 58),
                vec![node(
                    ElementKind::NamedArgument,
                    "children",
                    Range::from_coords(0, 7, 0, 57),
                    vec![
                        node(
                            ElementKind::ConstructorInvocation,
                            "Text",
                            Range::from_coords(0, 18, 0, 27),
                            vec![],
                        ),
                        node(
                            ElementKind::ConstructorInvocation,
                            "Padding",
                            Range::from_coords(0, 29, 0, 56),
                            vec![node(
                                ElementKind::NamedArgument,
                                "child",
                                Range::from_coords(0, 37, 0, 55),
                                vec![node(
                                    ElementKind::ConstructorInvocation,
                                    "Text",
                                    Range::from_coords(0, 44, 0, 53),
                                    vec![],
                                )],
                            )],
                        ),
                    ],
                )],
            )],
        )
    }

    fn find<'a>(root: &'a OutlineNode, start: usize) -> &'a OutlineNode {
        root.flatten_preorder()
            .into_iter()
            .find(|n| n.range.start.character == start && n.kind() != &ElementKind::CompilationUnit)
            .unwrap()
    }

    #[test]
    fn test_find_parent() {
        let root = sample();
        let inner_text = find(&root, 44);
        assert_eq!(find_parent(&root, inner_text).unwrap().name(), "child");

        let column = find(&root, 0);
        assert_eq!(find_parent(&root, column).unwrap().name(), "<unit>");

        let detached = node(ElementKind::Identifier, "x", Range::from_coords(3, 0, 3, 1), vec![]);
        assert!(find_parent(&root, &detached).is_none());
    }

    #[test]
    fn test_find_parent_matches_rederived_nodes_by_start() {
        let root = sample();
        let rederived = node(
            ElementKind::Identifier,
            "whatever",
            Range::from_coords(0, 29, 0, 30),
            vec![],
        );
        assert_eq!(find_parent(&root, &rederived).unwrap().name(), "children");
    }

    #[test]
    fn test_find_ancestor_of_kind() {
        let root = sample();
        let inner_text = find(&root, 44);

        let invocation =
            find_ancestor_of_kind(&root, inner_text, &ElementKind::ConstructorInvocation, None)
                .unwrap();
        assert_eq!(invocation.name(), "Padding");

        let column = find_ancestor_of_kind(
            &root,
            inner_text,
            &ElementKind::ConstructorInvocation,
            Some("Column"),
        )
        .unwrap();
        assert_eq!(column.range.start.character, 0);

        assert!(
            find_ancestor_of_kind(&root, inner_text, &ElementKind::ListLiteral, None).is_none()
        );
    }

    #[test]
    fn test_find_enclosing_list() {
        let root = sample();
        let inner_text = find(&root, 44);
        assert_eq!(find_enclosing_list(&root, inner_text).unwrap().name(), "children");
    }

    #[test]
    fn test_find_nearest_invocation_stops_at_children() {
        let root = sample();
        let child_arg = find(&root, 37);
        assert_eq!(
            find_nearest_invocation(&root, child_arg).unwrap().name(),
            "Padding"
        );

        let children_arg = find(&root, 7);
        assert_eq!(
            find_nearest_invocation(&root, children_arg).unwrap().name(),
            "Column"
        );

        let list_element = find(&root, 18);
        assert_eq!(
            find_nearest_invocation(&root, list_element).unwrap().name(),
            "Text"
        );
    }
}
