#![allow(dead_code)]

use outline_nav::{Element, ElementKind, LineIndex, OutlineNode, Position, Range, TextBuffer};

pub const HOME: &str = "// home screen
class Home extends StatelessWidget {
  Widget build(BuildContext context) {
    return Column(
      mainAxisSize: MainAxisSize.min,
      children: [
        Text('a, b'),
        Icon(Icons.star, size: 24),
        Padding(padding: EdgeInsets.all(8), child: Text('c')),
      ],
    );
  }
}
";

pub const HOME_URI: &str = "file:///lib/home.dart";

/// Position of the first occurrence of `needle`.
pub fn pos_of(source: &str, needle: &str) -> Position {
    let byte = source
        .find(needle)
        .unwrap_or_else(|| panic!("{needle:?} not found"));
    LineIndex::from_text(source).position_at(source[..byte].chars().count())
}

/// From the first `from` up to the end of the first `to` at or after it.
pub fn span(source: &str, from: &str, to: &str) -> Range {
    let start = source
        .find(from)
        .unwrap_or_else(|| panic!("{from:?} not found"));
    let end = source[start..]
        .find(to)
        .map(|offset| start + offset + to.len())
        .unwrap_or_else(|| panic!("{to:?} not found after {from:?}"));
    let index = LineIndex::from_text(source);
    Range::new(
        index.position_at(source[..start].chars().count()),
        index.position_at(source[..end].chars().count()),
    )
}

fn node(kind: ElementKind, name: &str, range: Range) -> OutlineNode {
    OutlineNode::new(Element::new(kind, name), range)
}

/// Outline of [`HOME`], shaped like a Flutter outline notification.
pub fn home_outline() -> OutlineNode {
    let src = HOME;
    let text_c = node(
        ElementKind::ConstructorInvocation,
        "Text",
        span(src, "Text('c')", "'c')"),
    );
    let padding = node(
        ElementKind::ConstructorInvocation,
        "Padding",
        span(src, "Padding(", "'c'))"),
    )
    .with_children(vec![
        node(
            ElementKind::NamedArgument,
            "padding",
            span(src, "padding: Edge", "all(8)"),
        ),
        node(
            ElementKind::NamedArgument,
            "child",
            span(src, "child: Text", "'c')"),
        )
        .with_children(vec![text_c]),
    ]);
    let icon = OutlineNode::new(
        Element::new(ElementKind::ConstructorInvocation, "Icon")
            .with_parameters("(Icons.star, size: 24)"),
        span(src, "Icon(", "24)"),
    );
    let text_ab = node(
        ElementKind::ConstructorInvocation,
        "Text",
        span(src, "Text('a, b')", ")"),
    );
    let column = node(
        ElementKind::ConstructorInvocation,
        "Column",
        span(src, "Column(", "\n    )"),
    )
    .with_children(vec![
        node(
            ElementKind::NamedArgument,
            "mainAxisSize",
            span(src, "mainAxisSize", "min"),
        ),
        node(
            ElementKind::NamedArgument,
            "children",
            span(src, "children: [", "]"),
        )
        .with_children(vec![text_ab, icon, padding]),
    ]);
    let build = node(
        ElementKind::MethodDeclaration,
        "build",
        span(src, "Widget build", "\n  }"),
    )
    .with_children(vec![column]);
    let class = node(
        ElementKind::ClassDeclaration,
        "Home",
        span(src, "class Home", "\n}"),
    )
    .with_children(vec![build]);

    node(
        ElementKind::CompilationUnit,
        "<unit>",
        Range::new(Position::new(0, 0), Position::new(13, 0)),
    )
    .with_children(vec![class])
}
