use blocks_renderer_engine::ListFormat;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ListProps {
    pub format: ListFormat,
    pub children: Element,
}

#[derive(Props, Clone, PartialEq)]
pub struct ListItemProps {
    pub children: Element,
}

#[component]
pub fn List(props: ListProps) -> Element {
    match props.format {
        ListFormat::Ordered => rsx! {
            ol { {props.children} }
        },
        ListFormat::Unordered => rsx! {
            ul { {props.children} }
        },
    }
}

#[component]
pub fn ListItem(props: ListItemProps) -> Element {
    rsx! {
        li { {props.children} }
    }
}
