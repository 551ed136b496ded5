//! Dioxus rendering for rich text block documents.
//!
//! [`BlocksRenderer`] takes a [`Document`](blocks_renderer_engine::Document)
//! and renders each root node through a registry of block components; text
//! leaves are wrapped by modifier components. Both registries start from the
//! built-in HTML renderers and can be overridden per kind.
//!
//! ```ignore
//! let blocks = BlockOverrides::new().quote(|props: QuoteProps| rsx! {
//!     blockquote { class: "pull-quote", {props.children} }
//! });
//! rsx! { BlocksRenderer { content: document, blocks } }
//! ```
//!
//! Content that cannot be rendered (unknown block types, modifiers with no
//! renderer, malformed nodes) produces no output and is reported once per
//! pass as a [`Diagnostic`], through `log` and an optional [`DiagnosticSink`].

pub mod context;
pub mod diagnostics;
pub mod registry;
pub mod ui;

pub use context::RenderContext;
pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use registry::{
    BlockOverrides, BlockRegistry, Components, ModifierOverrides, ModifierRegistry, Renderer,
};
pub use ui::components::*;
