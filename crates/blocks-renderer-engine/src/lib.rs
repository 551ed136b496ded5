//! Document model for rich text block documents.
//!
//! A document is an ordered sequence of root nodes (paragraphs, headings,
//! quotes, code blocks, lists and images) whose children are inline nodes
//! (text leaves with modifier flags, links and list items). This crate parses
//! the JSON form, assigns every node a stable render key and offers the plain
//! text flattening used for code blocks. It has no UI dependency; see
//! `blocks-renderer-dioxus` for rendering.

pub mod document;
pub mod io;
pub mod models;
pub mod parsing;
pub mod plain_text;

// Re-export key types for easier usage
pub use document::{Document, Walk};
pub use io::*;
pub use models::*;
pub use parsing::{DocumentError, MISSING_TYPE, parse_node};
pub use plain_text::plain_text;
