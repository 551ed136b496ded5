use blocks_renderer_engine::Image;
use dioxus::prelude::*;

/// Images are void: they get their metadata and never any children
#[derive(Props, Clone, PartialEq)]
pub struct ImageProps {
    pub image: Image,
}

#[component]
pub fn ImageBlock(props: ImageProps) -> Element {
    rsx! {
        img {
            src: "{props.image.url}",
            alt: props.image.alternative_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_image_uses_url_and_alternative_text() {
        let mut dom = VirtualDom::new_with_props(
            ImageBlock,
            ImageProps {
                image: Image::new("https://test.com/test.jpg").with_alternative_text("Test"),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.starts_with("<img"));
        assert!(html.contains(r#"src="https://test.com/test.jpg""#));
        assert!(html.contains(r#"alt="Test""#));
    }

    #[test]
    fn test_image_without_alternative_text() {
        let mut dom = VirtualDom::new_with_props(
            ImageBlock,
            ImageProps {
                image: Image::new("https://test.com/plain.png"),
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"src="https://test.com/plain.png""#));
        assert!(!html.contains("Test"));
    }
}
