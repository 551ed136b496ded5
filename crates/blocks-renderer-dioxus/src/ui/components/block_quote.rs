use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct QuoteProps {
    pub children: Element,
}

#[component]
pub fn BlockQuote(props: QuoteProps) -> Element {
    rsx! {
        blockquote { {props.children} }
    }
}
