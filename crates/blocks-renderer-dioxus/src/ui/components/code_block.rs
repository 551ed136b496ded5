use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CodeProps {
    /// Text of every descendant leaf, links flattened and modifiers dropped
    pub plain_text: String,
    /// Rendered children, for renderers that want formatting inside code
    pub children: Element,
}

/// Code blocks show their flattened text; nested modifier elements have no
/// place inside `<pre><code>`
#[component]
pub fn CodeBlock(props: CodeProps) -> Element {
    rsx! {
        pre {
            code { "{props.plain_text}" }
        }
    }
}
