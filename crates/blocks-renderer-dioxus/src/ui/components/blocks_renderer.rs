use crate::context::RenderContext;
use crate::diagnostics::DiagnosticSink;
use crate::registry::{BlockOverrides, Components, ModifierOverrides};
use crate::ui::components::block::Block;
use blocks_renderer_config::RenderConfig;
use blocks_renderer_engine::Document;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BlocksRendererProps {
    pub content: Document,
    /// Block renderers replacing the defaults per kind
    #[props(default)]
    pub blocks: Option<BlockOverrides>,
    /// Modifier renderers replacing the defaults per name
    #[props(default)]
    pub modifiers: Option<ModifierOverrides>,
    #[props(default)]
    pub config: Option<RenderConfig>,
    #[props(default)]
    pub on_diagnostic: Option<DiagnosticSink>,
}

impl BlocksRendererProps {
    pub fn new(content: Document) -> Self {
        Self {
            content,
            blocks: None,
            modifiers: None,
            config: None,
            on_diagnostic: None,
        }
    }

    pub fn with_blocks(mut self, blocks: BlockOverrides) -> Self {
        self.blocks = Some(blocks);
        self
    }

    pub fn with_modifiers(mut self, modifiers: ModifierOverrides) -> Self {
        self.modifiers = Some(modifiers);
        self
    }

    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_diagnostic_sink(mut self, sink: DiagnosticSink) -> Self {
        self.on_diagnostic = Some(sink);
        self
    }
}

/// Render a whole document. Registries and the diagnostics state are built
/// fresh for every pass from the props.
#[component]
pub fn BlocksRenderer(props: BlocksRendererProps) -> Element {
    let config = props.config.unwrap_or_default();
    let components = Components::new(
        &props.blocks.unwrap_or_default(),
        &props.modifiers.unwrap_or_default(),
    )
    .with_config(&config);
    let context =
        RenderContext::with_options(components, props.on_diagnostic, config.diagnostics);

    render_document(&props.content, &context)
}

/// Root nodes in order, keyed. Usable directly with a context built once and
/// shared across passes.
pub fn render_document(document: &Document, context: &RenderContext) -> Element {
    rsx! {
        {document.roots().iter().map(|node| {
            let key = node.key().to_string();
            rsx! {
                Block { key: "{key}", node: node.clone(), context: context.clone() }
            }
        })}
    }
}
