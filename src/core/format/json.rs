use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};

use crate::core::{
    error::DecodeError,
    tree::{Children, DictionaryNode, DictionaryTree},
};

const INDENT: &[u8] = b"    ";

/// Render `tree` as a pretty-printed JSON object with a trailing newline.
///
/// Entries keep their dictionary order.
pub fn render(tree: &DictionaryTree) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    tree.serialize(&mut serializer)?;
    buf.push(b'\n');
    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Parse an existing JSON dictionary.
///
/// The root must be an object. Nested objects and arrays load as nested
/// levels; other scalars keep their JSON text, `null` becomes empty.
pub fn parse(content: &str) -> Result<DictionaryTree, DecodeError> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| DecodeError::new(e.line(), e.to_string()))?;

    match value {
        Value::Object(map) => Ok(DictionaryTree::from_children(object_children(map))),
        _ => Err(DecodeError::new(1, "root of JSON dictionary must be an object")),
    }
}

fn object_children(map: Map<String, Value>) -> Children {
    map.into_iter()
        .map(|(key, value)| (key, value_to_node(value)))
        .collect()
}

fn value_to_node(value: Value) -> DictionaryNode {
    match value {
        Value::String(s) => DictionaryNode::Leaf(s),
        Value::Object(map) => DictionaryNode::SubTree(object_children(map)),
        Value::Array(items) => DictionaryNode::SubTree(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), value_to_node(item)))
                .collect(),
        ),
        Value::Null => DictionaryNode::Leaf(String::new()),
        other => DictionaryNode::Leaf(other.to_string()),
    }
}
