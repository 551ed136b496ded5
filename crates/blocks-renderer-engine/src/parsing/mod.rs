//! Conversion of the JSON wire form into [`Node`] trees.
//!
//! Parsing is permissive. Only document-level problems are errors; an
//! individual node that cannot be understood is kept in the tree as
//! [`NodeKind::Unknown`] or [`NodeKind::Malformed`] so rendering can skip it
//! and carry on with its siblings.

use crate::models::{BlockKind, HeadingLevel, Image, ListFormat, Modifier, Node, NodeKind, TextNode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Kind given to nodes that are not objects or have no string `type`
pub const MISSING_TYPE: &str = "<missing>";

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Document must be an array of nodes, found {found}")]
    NotASequence { found: &'static str },
}

#[derive(Deserialize)]
struct HeadingAttrs {
    level: HeadingLevel,
}

#[derive(Deserialize)]
struct ListAttrs {
    format: ListFormat,
}

#[derive(Deserialize)]
struct LinkAttrs {
    url: String,
}

#[derive(Deserialize)]
struct ImageAttrs {
    image: Image,
}

pub(crate) fn parse_roots(value: &Value) -> Result<Vec<Node>, DocumentError> {
    let Value::Array(items) = value else {
        return Err(DocumentError::NotASequence {
            found: json_type(value),
        });
    };
    Ok(items.iter().map(parse_node).collect())
}

/// Convert one JSON value into a node, never failing
pub fn parse_node(value: &Value) -> Node {
    let Some(fields) = value.as_object() else {
        return Node::unknown(MISSING_TYPE, Vec::new());
    };
    let Some(kind) = fields.get("type").and_then(Value::as_str) else {
        return Node::unknown(MISSING_TYPE, Vec::new());
    };

    if kind == "text" {
        return parse_text(fields);
    }

    let children = match fields.get("children") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(parse_node).collect(),
        Some(other) => {
            return malformed(
                kind,
                format!("children must be an array, found {}", json_type(other)),
            );
        }
    };

    match parse_kind(kind, value) {
        Ok(node_kind) => Node::new(node_kind, children),
        Err(reason) => malformed(kind, reason),
    }
}

fn parse_kind(kind: &str, value: &Value) -> Result<NodeKind, String> {
    let Ok(block_kind) = kind.parse::<BlockKind>() else {
        return Ok(NodeKind::Unknown {
            kind: kind.to_string(),
        });
    };

    let node_kind = match block_kind {
        BlockKind::Paragraph => NodeKind::Paragraph,
        BlockKind::Quote => NodeKind::Quote,
        BlockKind::Code => NodeKind::Code,
        BlockKind::ListItem => NodeKind::ListItem,
        BlockKind::Heading => {
            let HeadingAttrs { level } = attrs(value)?;
            NodeKind::Heading { level }
        }
        BlockKind::List => {
            let ListAttrs { format } = attrs(value)?;
            NodeKind::List { format }
        }
        BlockKind::Link => {
            let LinkAttrs { url } = attrs(value)?;
            NodeKind::Link { url }
        }
        BlockKind::Image => {
            let ImageAttrs { image } = attrs(value)?;
            NodeKind::Image(Box::new(image))
        }
    };
    Ok(node_kind)
}

fn attrs<T: DeserializeOwned>(value: &Value) -> Result<T, String> {
    T::deserialize(value).map_err(|e| e.to_string())
}

fn parse_text(fields: &Map<String, Value>) -> Node {
    let Some(text) = fields.get("text").and_then(Value::as_str) else {
        return malformed("text", "text must be a string".to_string());
    };

    let mut node = TextNode::new(text);
    for (name, flag) in fields {
        // Anything but a literal `true` leaves the modifier off
        if name == "type" || name == "text" || flag.as_bool() != Some(true) {
            continue;
        }
        match name.parse::<Modifier>() {
            Ok(modifier) => node.modifiers.insert(modifier),
            Err(_) => node.unknown_modifiers.push(name.clone()),
        }
    }
    node.unknown_modifiers.sort();

    Node::text(node)
}

fn malformed(kind: &str, reason: String) -> Node {
    log::debug!("Malformed \"{kind}\" node: {reason}");
    Node::new(
        NodeKind::Malformed {
            kind: kind.to_string(),
            reason,
        },
        Vec::new(),
    )
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
