use crate::context::RenderContext;
use crate::diagnostics::Diagnostic;
use crate::ui::components::modifiers::ModifierProps;
use blocks_renderer_engine::TextNode;
use dioxus::prelude::*;

#[component]
pub fn Text(text: TextNode, context: RenderContext) -> Element {
    render_text(&text, &context)
}

/// Render a text leaf wrapped in its modifiers.
///
/// Modifiers apply in canonical order, so the first one ends up innermost:
/// bold + underline gives `<u><strong>..</strong></u>`. A modifier with no
/// renderer is reported and left off. With no modifiers the text is emitted
/// bare, without any wrapper element.
pub fn render_text(text: &TextNode, context: &RenderContext) -> Element {
    let registry = context.modifiers();
    let mut content = lines(&text.text);

    for modifier in text.modifiers.iter() {
        match registry.get(modifier) {
            Some(render) => content = render(ModifierProps { children: content }),
            None => context.report(Diagnostic::MissingModifier {
                name: modifier.name().to_string(),
            }),
        }
    }
    for name in &text.unknown_modifiers {
        context.report(Diagnostic::MissingModifier { name: name.clone() });
    }

    content
}

fn lines(text: &str) -> Element {
    if !text.contains('\n') {
        return rsx! { "{text}" };
    }

    rsx! {
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                br {}
            }
            "{line}"
        }
    }
}
