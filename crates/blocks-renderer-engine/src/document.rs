use crate::models::{Node, NodeKey, NodeKind};
use crate::parsing::{self, DocumentError};
use std::collections::{HashMap, HashSet};
use std::hash::{DefaultHasher, Hash, Hasher};

/// An ordered sequence of root nodes with render keys assigned.
///
/// Every node's key is derived from its content (kind, attributes and the
/// keys of its children). Siblings with identical content are told apart by
/// how many identical siblings precede them, so:
///
/// - no two siblings ever share a key
/// - the same tree always produces the same keys
/// - inserting or reordering siblings leaves the keys of unchanged nodes alone
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    roots: Vec<Node>,
}

impl Document {
    pub fn new(mut roots: Vec<Node>) -> Self {
        assign_keys(&mut roots);
        Self { roots }
    }

    /// Parse the JSON form of a document: an array of root nodes
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self, DocumentError> {
        parsing::parse_roots(value).map(Self::new)
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Every node in document order (depth-first, parents before children)
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: self.roots.iter().rev().collect(),
        }
    }
}

pub struct Walk<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

fn assign_keys(siblings: &mut [Node]) {
    let mut taken = HashSet::with_capacity(siblings.len());
    let mut occurrences: HashMap<u64, u64> = HashMap::new();

    for node in siblings.iter_mut() {
        assign_keys(node.children_mut());

        let fingerprint = fingerprint(node);
        let occurrence = occurrences.entry(fingerprint).or_insert(0);
        let mut candidate = mix(fingerprint, *occurrence);
        *occurrence += 1;

        while !taken.insert(candidate) {
            candidate = mix(candidate, 1);
        }
        node.key = NodeKey(candidate);
    }
}

fn fingerprint(node: &Node) -> u64 {
    let mut hasher = DefaultHasher::new();
    node.kind().type_name().hash(&mut hasher);

    match node.kind() {
        NodeKind::Heading { level } => level.hash(&mut hasher),
        NodeKind::List { format } => format.hash(&mut hasher),
        NodeKind::Link { url } => url.hash(&mut hasher),
        NodeKind::Image(image) => image.hash_identity(&mut hasher),
        NodeKind::Text(text) => {
            text.text.hash(&mut hasher);
            text.modifiers.hash(&mut hasher);
            text.unknown_modifiers.hash(&mut hasher);
        }
        NodeKind::Malformed { reason, .. } => reason.hash(&mut hasher),
        NodeKind::Paragraph
        | NodeKind::Quote
        | NodeKind::Code
        | NodeKind::ListItem
        | NodeKind::Unknown { .. } => {}
    }

    node.children().len().hash(&mut hasher);
    for child in node.children() {
        child.key().as_u64().hash(&mut hasher);
    }
    hasher.finish()
}

fn mix(value: u64, salt: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    salt.hash(&mut hasher);
    hasher.finish()
}
