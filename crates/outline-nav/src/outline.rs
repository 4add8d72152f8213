//! Outline tree data model.
//!
//! An outline is a tree of structural elements (declarations, invocations, arguments, list
//! literals) with source ranges, rooted at one compilation-unit node per file. The tree is
//! supplied by an external analysis service for one document version and is only ever read.
//!
//! Invariant: every child's range is enclosed by its parent's range (shared endpoints allowed),
//! and children are in source order.

use crate::geometry::{Position, Range};

/// Kind tag of an outline element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// File root.
    CompilationUnit,
    /// A class (or mixin / extension) declaration.
    ClassDeclaration,
    /// A field declaration.
    FieldDeclaration,
    /// A method declaration.
    MethodDeclaration,
    /// A constructor declaration.
    ConstructorDeclaration,
    /// A top-level function declaration.
    FunctionDeclaration,
    /// A constructor-like invocation (`Text('a')`, `Padding(child: ..)`).
    ConstructorInvocation,
    /// A method / function invocation.
    MethodInvocation,
    /// A `name: value` argument.
    NamedArgument,
    /// A bare positional argument.
    PositionalArgument,
    /// A list literal (`[a, b, c]`).
    ListLiteral,
    /// A bare identifier reference.
    Identifier,
    /// A wire kind outside the known vocabulary.
    Other(String),
}

impl ElementKind {
    /// Parse an analysis-server kind tag (`CONSTRUCTOR_INVOCATION`, `CLASS`, ...).
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            "COMPILATION_UNIT" => Self::CompilationUnit,
            "CLASS" | "CLASS_DECLARATION" | "MIXIN" | "EXTENSION" | "ENUM" => {
                Self::ClassDeclaration
            }
            "FIELD" | "FIELD_DECLARATION" => Self::FieldDeclaration,
            "METHOD" | "METHOD_DECLARATION" | "GETTER" | "SETTER" => Self::MethodDeclaration,
            "CONSTRUCTOR" | "CONSTRUCTOR_DECLARATION" => Self::ConstructorDeclaration,
            "FUNCTION" | "FUNCTION_DECLARATION" => Self::FunctionDeclaration,
            "CONSTRUCTOR_INVOCATION" | "NEW_INSTANCE" => Self::ConstructorInvocation,
            "METHOD_INVOCATION" | "INVOCATION" => Self::MethodInvocation,
            "NAMED_ARGUMENT" => Self::NamedArgument,
            "POSITIONAL_ARGUMENT" => Self::PositionalArgument,
            "LIST_LITERAL" => Self::ListLiteral,
            "IDENTIFIER" => Self::Identifier,
            other => Self::Other(other.to_string()),
        }
    }

    /// The canonical wire tag for this kind.
    pub fn as_wire(&self) -> &str {
        match self {
            Self::CompilationUnit => "COMPILATION_UNIT",
            Self::ClassDeclaration => "CLASS",
            Self::FieldDeclaration => "FIELD",
            Self::MethodDeclaration => "METHOD",
            Self::ConstructorDeclaration => "CONSTRUCTOR",
            Self::FunctionDeclaration => "FUNCTION",
            Self::ConstructorInvocation => "CONSTRUCTOR_INVOCATION",
            Self::MethodInvocation => "METHOD_INVOCATION",
            Self::NamedArgument => "NAMED_ARGUMENT",
            Self::PositionalArgument => "POSITIONAL_ARGUMENT",
            Self::ListLiteral => "LIST_LITERAL",
            Self::Identifier => "IDENTIFIER",
            Self::Other(tag) => tag.as_str(),
        }
    }

    /// Invocation anchors for argument navigation.
    pub fn is_invocation(&self) -> bool {
        matches!(self, Self::ConstructorInvocation | Self::MethodInvocation)
    }

    /// Named or positional argument.
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::NamedArgument | Self::PositionalArgument)
    }

    /// Declarations that make up a class body or a compilation unit.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            Self::ClassDeclaration
                | Self::FieldDeclaration
                | Self::MethodDeclaration
                | Self::ConstructorDeclaration
                | Self::FunctionDeclaration
        )
    }

    /// Leaf-like kinds that can be elements of a navigable list.
    pub fn is_list_element(&self) -> bool {
        matches!(
            self,
            Self::ConstructorInvocation | Self::MethodInvocation | Self::Identifier
        )
    }
}

/// The structural element an outline node describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Kind tag.
    pub kind: ElementKind,
    /// Element name (class name, argument name, invoked constructor, ...).
    pub name: String,
    /// Raw parameter / argument-list text, when the server reports one.
    pub parameters: Option<String>,
    /// Raw type-parameter text.
    pub type_parameters: Option<String>,
    /// Declared return type.
    pub return_type: Option<String>,
}

impl Element {
    /// Create an element with no optional fields.
    pub fn new(kind: ElementKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            parameters: None,
            type_parameters: None,
            return_type: None,
        }
    }

    /// Attach raw parameter text.
    pub fn with_parameters(mut self, parameters: impl Into<String>) -> Self {
        self.parameters = Some(parameters.into());
        self
    }
}

/// A single outline node (hierarchical).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    /// The described element.
    pub element: Element,
    /// Full source range of the node.
    pub range: Range,
    /// Child nodes, in source order.
    pub children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Create a leaf node.
    pub fn new(element: Element, range: Range) -> Self {
        Self {
            element,
            range,
            children: Vec::new(),
        }
    }

    /// Builder-style child list.
    pub fn with_children(mut self, children: Vec<OutlineNode>) -> Self {
        self.children = children;
        self
    }

    /// Element kind shorthand.
    pub fn kind(&self) -> &ElementKind {
        &self.element.kind
    }

    /// Element name shorthand.
    pub fn name(&self) -> &str {
        &self.element.name
    }

    /// Returns `true` if the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if `pos` lies within this node's range (inclusive).
    pub fn contains(&self, pos: Position) -> bool {
        self.range.contains(pos)
    }

    /// Visit this node and all descendants in pre-order.
    pub fn walk_preorder<'a>(&'a self, visit: &mut impl FnMut(&'a OutlineNode)) {
        visit(self);
        for child in &self.children {
            child.walk_preorder(visit);
        }
    }

    /// Collect this node and all descendants in pre-order.
    pub fn flatten_preorder(&self) -> Vec<&OutlineNode> {
        let mut out = Vec::new();
        self.walk_preorder(&mut |node| out.push(node));
        out
    }

    /// Total node count, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(OutlineNode::node_count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_kinds_round_trip_canonical_tags() {
        for tag in [
            "COMPILATION_UNIT",
            "CLASS",
            "CONSTRUCTOR_INVOCATION",
            "NAMED_ARGUMENT",
            "LIST_LITERAL",
            "IDENTIFIER",
        ] {
            assert_eq!(ElementKind::from_wire(tag).as_wire(), tag);
        }
        assert_eq!(
            ElementKind::from_wire("NEW_INSTANCE"),
            ElementKind::ConstructorInvocation
        );
        assert_eq!(
            ElementKind::from_wire("TYPEDEF"),
            ElementKind::Other("TYPEDEF".to_string())
        );
    }

    #[test]
    fn test_kind_classes() {
        assert!(ElementKind::MethodInvocation.is_invocation());
        assert!(ElementKind::PositionalArgument.is_argument());
        assert!(ElementKind::FieldDeclaration.is_declaration());
        assert!(ElementKind::Identifier.is_list_element());
        assert!(!ElementKind::ListLiteral.is_list_element());
        assert!(!ElementKind::CompilationUnit.is_declaration());
    }

    #[test]
    fn test_flatten_preorder() {
        let leaf = |name: &str, col: usize| {
            OutlineNode::new(
                Element::new(ElementKind::Identifier, name),
                Range::from_coords(0, col, 0, col + 1),
            )
        };
        let root = OutlineNode::new(
            Element::new(ElementKind::CompilationUnit, "<unit>"),
            Range::from_coords(0, 0, 0, 10),
        )
        .with_children(vec![
            OutlineNode::new(
                Element::new(ElementKind::ListLiteral, "[]"),
                Range::from_coords(0, 0, 0, 5),
            )
            .with_children(vec![leaf("a", 1), leaf("b", 3)]),
            leaf("c", 7),
        ]);

        let names: Vec<&str> = root.flatten_preorder().iter().map(|n| n.name()).collect();
        assert_eq!(names, vec!["<unit>", "[]", "a", "b", "c"]);
        assert_eq!(root.node_count(), 5);
    }
}
