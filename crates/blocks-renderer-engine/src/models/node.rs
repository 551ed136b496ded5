use crate::models::image::Image;
use crate::models::modifier::{Modifier, ModifierSet};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Stable render identity of a node.
///
/// Assigned by [`crate::Document::new`]; nodes built by hand carry the
/// default key until they are placed in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) u64);

impl NodeKey {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub u8);

/// Heading level, always within 1..=6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub fn new(level: u8) -> Result<Self, InvalidHeadingLevel> {
        if (1..=6).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u32 {
    fn from(level: HeadingLevel) -> Self {
        level.0.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    Ordered,
    Unordered,
}

impl ListFormat {
    pub fn name(self) -> &'static str {
        match self {
            ListFormat::Ordered => "ordered",
            ListFormat::Unordered => "unordered",
        }
    }
}

/// Node kinds that are rendered through the block registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    Paragraph,
    Heading,
    Quote,
    Code,
    Link,
    List,
    ListItem,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Paragraph,
        BlockKind::Heading,
        BlockKind::Quote,
        BlockKind::Code,
        BlockKind::Link,
        BlockKind::List,
        BlockKind::ListItem,
        BlockKind::Image,
    ];

    /// The `type` discriminator used in the JSON document
    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "paragraph",
            BlockKind::Heading => "heading",
            BlockKind::Quote => "quote",
            BlockKind::Code => "code",
            BlockKind::Link => "link",
            BlockKind::List => "list",
            BlockKind::ListItem => "list-item",
            BlockKind::Image => "image",
        }
    }

    /// Void kinds never render children
    pub fn is_void(self) -> bool {
        matches!(self, BlockKind::Image)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown block kind \"{0}\"")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

/// Inline text leaf: a string plus the modifiers switched on for it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextNode {
    pub text: String,
    pub modifiers: ModifierSet,
    /// Flags set to `true` whose names are not known modifiers, sorted by name
    pub unknown_modifiers: Vec<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    pub fn bold(self) -> Self {
        self.with(Modifier::Bold)
    }

    pub fn italic(self) -> Self {
        self.with(Modifier::Italic)
    }

    pub fn underline(self) -> Self {
        self.with(Modifier::Underline)
    }

    pub fn strikethrough(self) -> Self {
        self.with(Modifier::Strikethrough)
    }

    pub fn code(self) -> Self {
        self.with(Modifier::Code)
    }

    pub fn with_unknown(mut self, name: impl Into<String>) -> Self {
        self.unknown_modifiers.push(name.into());
        self
    }
}

/// What a node is, together with its kind-specific attributes
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Paragraph,
    Heading { level: HeadingLevel },
    Quote,
    Code,
    List { format: ListFormat },
    ListItem,
    Image(Box<Image>),
    Link { url: String },
    Text(TextNode),
    /// A `type` no renderer exists for
    Unknown { kind: String },
    /// A known `type` whose fields do not fit it
    Malformed { kind: String, reason: String },
}

impl NodeKind {
    /// The `type` discriminator this node was declared with
    pub fn type_name(&self) -> &str {
        match self {
            NodeKind::Text(_) => "text",
            NodeKind::Unknown { kind } | NodeKind::Malformed { kind, .. } => kind,
            other => other
                .block_kind()
                .map(BlockKind::name)
                .unwrap_or_default(),
        }
    }

    pub fn block_kind(&self) -> Option<BlockKind> {
        match self {
            NodeKind::Paragraph => Some(BlockKind::Paragraph),
            NodeKind::Heading { .. } => Some(BlockKind::Heading),
            NodeKind::Quote => Some(BlockKind::Quote),
            NodeKind::Code => Some(BlockKind::Code),
            NodeKind::List { .. } => Some(BlockKind::List),
            NodeKind::ListItem => Some(BlockKind::ListItem),
            NodeKind::Image(_) => Some(BlockKind::Image),
            NodeKind::Link { .. } => Some(BlockKind::Link),
            NodeKind::Text(_) | NodeKind::Unknown { .. } | NodeKind::Malformed { .. } => None,
        }
    }
}

/// One node of a document tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) key: NodeKey,
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        // Leaves and void kinds never hold children
        let children = match &kind {
            NodeKind::Text(_) | NodeKind::Image(_) => Vec::new(),
            _ => children,
        };
        Self {
            key: NodeKey::default(),
            kind,
            children,
        }
    }

    pub fn paragraph(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Paragraph, children)
    }

    pub fn heading(level: HeadingLevel, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Heading { level }, children)
    }

    pub fn quote(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Quote, children)
    }

    pub fn code(children: Vec<Node>) -> Self {
        Self::new(NodeKind::Code, children)
    }

    pub fn list(format: ListFormat, children: Vec<Node>) -> Self {
        Self::new(NodeKind::List { format }, children)
    }

    pub fn list_item(children: Vec<Node>) -> Self {
        Self::new(NodeKind::ListItem, children)
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Link { url: url.into() }, children)
    }

    pub fn image(image: Image) -> Self {
        Self::new(NodeKind::Image(Box::new(image)), Vec::new())
    }

    pub fn text(text: impl Into<TextNode>) -> Self {
        Self::new(NodeKind::Text(text.into()), Vec::new())
    }

    pub fn unknown(kind: impl Into<String>, children: Vec<Node>) -> Self {
        Self::new(NodeKind::Unknown { kind: kind.into() }, children)
    }

    pub fn key(&self) -> NodeKey {
        self.key
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match &self.kind {
            NodeKind::Text(text) => Some(text),
            _ => None,
        }
    }

    /// A paragraph holding exactly one empty text leaf, which stands for an
    /// intentionally blank line
    pub fn is_blank_paragraph(&self) -> bool {
        matches!(self.kind, NodeKind::Paragraph)
            && matches!(
                self.children.as_slice(),
                [only] if only.as_text().is_some_and(|text| text.text.is_empty())
            )
    }
}

impl From<&str> for TextNode {
    fn from(text: &str) -> Self {
        TextNode::new(text)
    }
}

impl From<String> for TextNode {
    fn from(text: String) -> Self {
        TextNode::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn test_valid_heading_levels(#[case] level: u8) {
        assert_eq!(HeadingLevel::new(level).map(HeadingLevel::get), Ok(level));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(255)]
    fn test_invalid_heading_levels(#[case] level: u8) {
        assert_eq!(HeadingLevel::new(level), Err(InvalidHeadingLevel(level)));
    }

    #[test]
    fn test_block_kind_names_roundtrip() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.name().parse::<BlockKind>(), Ok(kind));
        }
        assert!("text".parse::<BlockKind>().is_err());
        assert_eq!(
            "list-item".parse::<BlockKind>(),
            Ok(BlockKind::ListItem)
        );
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Node::text("a").kind().type_name(), "text");
        assert_eq!(Node::list_item(vec![]).kind().type_name(), "list-item");
        assert_eq!(Node::unknown("callout", vec![]).kind().type_name(), "callout");
    }

    #[test]
    fn test_void_and_leaf_nodes_drop_children() {
        let image = Node::new(
            NodeKind::Image(Box::new(Image::new("/a.png"))),
            vec![Node::text("")],
        );
        assert!(image.children().is_empty());

        let text = Node::new(NodeKind::Text(TextNode::new("x")), vec![Node::text("y")]);
        assert!(text.children().is_empty());
    }

    #[test]
    fn test_blank_paragraph_detection() {
        assert!(Node::paragraph(vec![Node::text("")]).is_blank_paragraph());
        assert!(!Node::paragraph(vec![Node::text(" ")]).is_blank_paragraph());
        assert!(!Node::paragraph(vec![Node::text(""), Node::text("")]).is_blank_paragraph());
        assert!(!Node::paragraph(vec![]).is_blank_paragraph());
        assert!(!Node::quote(vec![Node::text("")]).is_blank_paragraph());
        assert!(
            !Node::paragraph(vec![Node::link("https://x", vec![Node::text("")])])
                .is_blank_paragraph()
        );
    }
}
