//! Outline payloads as JSON.
//!
//! Parses the tree carried by `dart/textDocument/publishOutline`:
//!
//! ```json
//! {
//!   "element": { "kind": "CLASS", "name": "Home", "parameters": "(...)" },
//!   "range": { "start": { "line": 0, "character": 0 }, "end": { "line": 9, "character": 1 } },
//!   "children": [ ... ]
//! }
//! ```
//!
//! A node without `element.kind` or a usable `range` is dropped together with its subtree;
//! its siblings survive. Missing `name` and `children` default to empty.

use crate::coords::LspCoordinateConverter;
use outline_nav::{Element, ElementKind, LineIndex, OutlineNode, Position, Range};
use serde_json::{Value, json};

fn parse_position(value: &Value) -> Option<(usize, usize)> {
    Some((
        value.get("line")?.as_u64()? as usize,
        value.get("character")?.as_u64()? as usize,
    ))
}

fn parse_range(value: &Value, convert: &impl Fn(usize, usize) -> Position) -> Option<Range> {
    let (start_line, start_char) = parse_position(value.get("start")?)?;
    let (end_line, end_char) = parse_position(value.get("end")?)?;
    let start = convert(start_line, start_char);
    let end = convert(end_line, end_char);
    Some(Range::new(start.min(end), start.max(end)))
}

fn optional_string(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn parse_element(value: &Value) -> Option<Element> {
    let kind = ElementKind::from_wire(value.get("kind")?.as_str()?);
    let name = optional_string(value, "name").unwrap_or_default();
    Some(Element {
        kind,
        name,
        parameters: optional_string(value, "parameters"),
        type_parameters: optional_string(value, "typeParameters"),
        return_type: optional_string(value, "returnType"),
    })
}

fn parse_node(value: &Value, convert: &impl Fn(usize, usize) -> Position) -> Option<OutlineNode> {
    let element = parse_element(value.get("element")?)?;
    let range = parse_range(value.get("range")?, convert)?;
    let children = value
        .get("children")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|child| parse_node(child, convert))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Some(OutlineNode::new(element, range).with_children(children))
}

/// Parse an outline whose `character` columns are already character offsets.
pub fn outline_from_value(value: &Value) -> Option<OutlineNode> {
    parse_node(value, &|line, character| Position::new(line, character))
}

/// Parse an outline whose `character` columns are UTF-16 code units.
pub fn outline_from_value_utf16(line_index: &LineIndex, value: &Value) -> Option<OutlineNode> {
    parse_node(value, &|line, character| {
        LspCoordinateConverter::position_from_utf16(line_index, line, character)
    })
}

/// Serialize an outline back into the wire shape (character columns).
pub fn outline_to_value(node: &OutlineNode) -> Value {
    let position = |pos: Position| json!({ "line": pos.line, "character": pos.character });
    let mut element = json!({
        "kind": node.element.kind.as_wire(),
        "name": node.element.name,
    });
    let optional = [
        ("parameters", &node.element.parameters),
        ("typeParameters", &node.element.type_parameters),
        ("returnType", &node.element.return_type),
    ];
    for (key, field) in optional {
        if let Some(text) = field {
            element[key] = Value::String(text.clone());
        }
    }

    json!({
        "element": element,
        "range": { "start": position(node.range.start), "end": position(node.range.end) },
        "children": node.children.iter().map(outline_to_value).collect::<Vec<_>>(),
    })
}
