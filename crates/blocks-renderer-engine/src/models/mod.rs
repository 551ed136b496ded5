pub mod image;
pub mod modifier;
pub mod node;

pub use image::Image;
pub use modifier::{Modifier, ModifierSet, UnknownModifier};
pub use node::{
    BlockKind, HeadingLevel, InvalidHeadingLevel, ListFormat, Node, NodeKey, NodeKind, TextNode,
    UnknownBlockKind,
};
