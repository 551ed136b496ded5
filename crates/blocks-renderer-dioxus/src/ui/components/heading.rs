use blocks_renderer_engine::HeadingLevel;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeadingProps {
    pub level: HeadingLevel,
    pub children: Element,
}

#[component]
pub fn Heading(props: HeadingProps) -> Element {
    let children = props.children;

    match props.level.get() {
        1 => rsx! { h1 { {children} } },
        2 => rsx! { h2 { {children} } },
        3 => rsx! { h3 { {children} } },
        4 => rsx! { h4 { {children} } },
        5 => rsx! { h5 { {children} } },
        _ => rsx! { h6 { {children} } },
    }
}
