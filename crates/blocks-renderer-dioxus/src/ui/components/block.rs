use crate::context::RenderContext;
use crate::diagnostics::Diagnostic;
use crate::ui::components::{
    block_quote::QuoteProps,
    code_block::CodeProps,
    heading::HeadingProps,
    image::ImageProps,
    link::LinkProps,
    list::{ListItemProps, ListProps},
    paragraph::ParagraphProps,
    text::Text,
};
use blocks_renderer_engine::{BlockKind, Node, NodeKind};
use dioxus::prelude::*;

#[component]
pub fn Block(node: Node, context: RenderContext) -> Element {
    render_block(&node, &context)
}

/// Render one non-text node through the block registry.
///
/// Nodes whose kind has no renderer, unknown kinds and malformed nodes render
/// nothing and are reported on `context`; their subtree is not visited.
pub fn render_block(node: &Node, context: &RenderContext) -> Element {
    let blocks = context.blocks();

    match node.kind() {
        NodeKind::Paragraph => {
            let Some(render) = blocks.paragraph() else {
                return missing(node, context);
            };
            if node.is_blank_paragraph() {
                return rsx! { br {} };
            }
            render(ParagraphProps {
                children: render_children(node.children(), context),
            })
        }
        NodeKind::Heading { level } => {
            let Some(render) = blocks.heading() else {
                return missing(node, context);
            };
            render(HeadingProps {
                level: *level,
                children: render_children(node.children(), context),
            })
        }
        NodeKind::Quote => {
            let Some(render) = blocks.quote() else {
                return missing(node, context);
            };
            render(QuoteProps {
                children: render_children(node.children(), context),
            })
        }
        NodeKind::Code => {
            let Some(render) = blocks.code() else {
                return missing(node, context);
            };
            render(CodeProps {
                plain_text: node.plain_text(),
                children: render_children(node.children(), context),
            })
        }
        NodeKind::Link { url } => {
            let Some(render) = blocks.link() else {
                return missing(node, context);
            };
            render(LinkProps {
                url: url.clone(),
                children: render_children(node.children(), context),
            })
        }
        NodeKind::List { format } => {
            let Some(render) = blocks.list() else {
                return missing(node, context);
            };
            render(ListProps {
                format: *format,
                children: render_list_children(node.children(), context),
            })
        }
        NodeKind::ListItem => {
            let Some(render) = blocks.list_item() else {
                return missing(node, context);
            };
            render(ListItemProps {
                children: render_children(node.children(), context),
            })
        }
        NodeKind::Image(image) => {
            let Some(render) = blocks.image() else {
                return missing(node, context);
            };
            render(ImageProps {
                image: (**image).clone(),
            })
        }
        NodeKind::Malformed { kind, reason } => {
            context.report(Diagnostic::MalformedNode {
                kind: kind.clone(),
                reason: reason.clone(),
            });
            rsx! {}
        }
        // Text leaves reach here only when handed to `render_block` directly
        NodeKind::Text(_) | NodeKind::Unknown { .. } => missing(node, context),
    }
}

fn missing(node: &Node, context: &RenderContext) -> Element {
    context.report(Diagnostic::MissingBlock {
        kind: node.kind().type_name().to_string(),
    });
    rsx! {}
}

/// Children in order, each keyed by its node key
pub fn render_children(children: &[Node], context: &RenderContext) -> Element {
    rsx! {
        {children.iter().map(|child| render_child(child, context))}
    }
}

/// Lists only hold list items and nested lists; anything else is skipped
fn render_list_children(children: &[Node], context: &RenderContext) -> Element {
    rsx! {
        {children.iter().map(|child| {
            let kind = child.kind().type_name();
            if kind == BlockKind::ListItem.name() || kind == BlockKind::List.name() {
                render_child(child, context)
            } else {
                context.report(Diagnostic::MisplacedNode {
                    parent: BlockKind::List.name().to_string(),
                    kind: kind.to_string(),
                });
                rsx! {}
            }
        })}
    }
}

fn render_child(child: &Node, context: &RenderContext) -> Element {
    let key = child.key().to_string();
    match child.as_text() {
        Some(text) => rsx! {
            Text { key: "{key}", text: text.clone(), context: context.clone() }
        },
        None => rsx! {
            Block { key: "{key}", node: child.clone(), context: context.clone() }
        },
    }
}
