use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ParagraphProps {
    pub children: Element,
}

#[component]
pub fn Paragraph(props: ParagraphProps) -> Element {
    rsx! {
        p { {props.children} }
    }
}
