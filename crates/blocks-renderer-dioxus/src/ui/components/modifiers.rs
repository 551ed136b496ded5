use dioxus::prelude::*;

/// Props shared by every modifier: the content being decorated
#[derive(Props, Clone, PartialEq)]
pub struct ModifierProps {
    pub children: Element,
}

#[component]
pub fn Bold(props: ModifierProps) -> Element {
    rsx! { strong { {props.children} } }
}

#[component]
pub fn Italic(props: ModifierProps) -> Element {
    rsx! { em { {props.children} } }
}

#[component]
pub fn Underline(props: ModifierProps) -> Element {
    rsx! { u { {props.children} } }
}

#[component]
pub fn Strikethrough(props: ModifierProps) -> Element {
    rsx! { del { {props.children} } }
}

#[component]
pub fn InlineCode(props: ModifierProps) -> Element {
    rsx! { code { {props.children} } }
}
