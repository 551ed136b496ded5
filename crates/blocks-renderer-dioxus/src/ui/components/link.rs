use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LinkProps {
    pub url: String,
    pub children: Element,
}

#[component]
pub fn InlineLink(props: LinkProps) -> Element {
    rsx! {
        a { href: "{props.url}", {props.children} }
    }
}
