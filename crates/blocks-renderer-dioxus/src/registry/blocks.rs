use super::{Renderer, same_renderer};
use crate::ui::components::{
    BlockQuote, CodeBlock, CodeProps, Heading, HeadingProps, ImageBlock, ImageProps, InlineLink,
    LinkProps, List, ListItem, ListItemProps, ListProps, Paragraph, ParagraphProps, QuoteProps,
};
use blocks_renderer_engine::BlockKind;
use dioxus::prelude::*;
use std::rc::Rc;

/// One renderer slot per block kind, each taking that kind's own props.
///
/// An empty slot means the kind is unsupported: nodes of that kind render
/// nothing and raise a missing-block diagnostic.
#[derive(Clone)]
pub struct BlockRegistry {
    paragraph: Option<Renderer<ParagraphProps>>,
    heading: Option<Renderer<HeadingProps>>,
    quote: Option<Renderer<QuoteProps>>,
    code: Option<Renderer<CodeProps>>,
    link: Option<Renderer<LinkProps>>,
    list: Option<Renderer<ListProps>>,
    list_item: Option<Renderer<ListItemProps>>,
    image: Option<Renderer<ImageProps>>,
}

impl Default for BlockRegistry {
    /// The built-in HTML renderers for every block kind
    fn default() -> Self {
        Self {
            paragraph: Some(Rc::new(Paragraph)),
            heading: Some(Rc::new(Heading)),
            quote: Some(Rc::new(BlockQuote)),
            code: Some(Rc::new(CodeBlock)),
            link: Some(Rc::new(InlineLink)),
            list: Some(Rc::new(List)),
            list_item: Some(Rc::new(ListItem)),
            image: Some(Rc::new(ImageBlock)),
        }
    }
}

impl BlockRegistry {
    pub fn empty() -> Self {
        Self {
            paragraph: None,
            heading: None,
            quote: None,
            code: None,
            link: None,
            list: None,
            list_item: None,
            image: None,
        }
    }

    /// Every kind in `overrides` replaces the one in `defaults`; the rest
    /// fall back to `defaults`. Neither input is modified.
    pub fn merge(defaults: &BlockRegistry, overrides: &BlockOverrides) -> Self {
        let custom = &overrides.0;
        Self {
            paragraph: custom.paragraph.clone().or_else(|| defaults.paragraph.clone()),
            heading: custom.heading.clone().or_else(|| defaults.heading.clone()),
            quote: custom.quote.clone().or_else(|| defaults.quote.clone()),
            code: custom.code.clone().or_else(|| defaults.code.clone()),
            link: custom.link.clone().or_else(|| defaults.link.clone()),
            list: custom.list.clone().or_else(|| defaults.list.clone()),
            list_item: custom.list_item.clone().or_else(|| defaults.list_item.clone()),
            image: custom.image.clone().or_else(|| defaults.image.clone()),
        }
    }

    /// Drop the renderer for `kind`, making that kind unsupported
    pub fn without(mut self, kind: BlockKind) -> Self {
        match kind {
            BlockKind::Paragraph => self.paragraph = None,
            BlockKind::Heading => self.heading = None,
            BlockKind::Quote => self.quote = None,
            BlockKind::Code => self.code = None,
            BlockKind::Link => self.link = None,
            BlockKind::List => self.list = None,
            BlockKind::ListItem => self.list_item = None,
            BlockKind::Image => self.image = None,
        }
        self
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        match kind {
            BlockKind::Paragraph => self.paragraph.is_some(),
            BlockKind::Heading => self.heading.is_some(),
            BlockKind::Quote => self.quote.is_some(),
            BlockKind::Code => self.code.is_some(),
            BlockKind::Link => self.link.is_some(),
            BlockKind::List => self.list.is_some(),
            BlockKind::ListItem => self.list_item.is_some(),
            BlockKind::Image => self.image.is_some(),
        }
    }

    pub fn paragraph(&self) -> Option<&Renderer<ParagraphProps>> {
        self.paragraph.as_ref()
    }

    pub fn heading(&self) -> Option<&Renderer<HeadingProps>> {
        self.heading.as_ref()
    }

    pub fn quote(&self) -> Option<&Renderer<QuoteProps>> {
        self.quote.as_ref()
    }

    pub fn code(&self) -> Option<&Renderer<CodeProps>> {
        self.code.as_ref()
    }

    pub fn link(&self) -> Option<&Renderer<LinkProps>> {
        self.link.as_ref()
    }

    pub fn list(&self) -> Option<&Renderer<ListProps>> {
        self.list.as_ref()
    }

    pub fn list_item(&self) -> Option<&Renderer<ListItemProps>> {
        self.list_item.as_ref()
    }

    pub fn image(&self) -> Option<&Renderer<ImageProps>> {
        self.image.as_ref()
    }
}

impl PartialEq for BlockRegistry {
    fn eq(&self, other: &Self) -> bool {
        same_renderer(self.paragraph(), other.paragraph())
            && same_renderer(self.heading(), other.heading())
            && same_renderer(self.quote(), other.quote())
            && same_renderer(self.code(), other.code())
            && same_renderer(self.link(), other.link())
            && same_renderer(self.list(), other.list())
            && same_renderer(self.list_item(), other.list_item())
            && same_renderer(self.image(), other.image())
    }
}

/// Caller supplied block renderers, layered over the defaults.
///
/// ```ignore
/// let blocks = BlockOverrides::new().paragraph(|props: ParagraphProps| {
///     rsx! { p { class: "lead", {props.children} } }
/// });
/// ```
#[derive(Clone, PartialEq)]
pub struct BlockOverrides(BlockRegistry);

impl Default for BlockOverrides {
    fn default() -> Self {
        Self(BlockRegistry::empty())
    }
}

impl BlockOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !BlockKind::ALL.iter().any(|kind| self.0.contains(*kind))
    }

    pub fn paragraph(mut self, render: impl Fn(ParagraphProps) -> Element + 'static) -> Self {
        self.0.paragraph = Some(Rc::new(render));
        self
    }

    pub fn heading(mut self, render: impl Fn(HeadingProps) -> Element + 'static) -> Self {
        self.0.heading = Some(Rc::new(render));
        self
    }

    pub fn quote(mut self, render: impl Fn(QuoteProps) -> Element + 'static) -> Self {
        self.0.quote = Some(Rc::new(render));
        self
    }

    pub fn code(mut self, render: impl Fn(CodeProps) -> Element + 'static) -> Self {
        self.0.code = Some(Rc::new(render));
        self
    }

    pub fn link(mut self, render: impl Fn(LinkProps) -> Element + 'static) -> Self {
        self.0.link = Some(Rc::new(render));
        self
    }

    pub fn list(mut self, render: impl Fn(ListProps) -> Element + 'static) -> Self {
        self.0.list = Some(Rc::new(render));
        self
    }

    pub fn list_item(mut self, render: impl Fn(ListItemProps) -> Element + 'static) -> Self {
        self.0.list_item = Some(Rc::new(render));
        self
    }

    pub fn image(mut self, render: impl Fn(ImageProps) -> Element + 'static) -> Self {
        self.0.image = Some(Rc::new(render));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_kind() {
        let registry = BlockRegistry::default();
        for kind in BlockKind::ALL {
            assert!(registry.contains(kind), "missing default for {kind}");
        }
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let defaults = BlockRegistry::default();
        let overrides = BlockOverrides::new().paragraph(|_| rsx! { "custom" });

        let merged = BlockRegistry::merge(&defaults, &overrides);

        assert!(!Rc::ptr_eq(
            merged.paragraph().unwrap(),
            defaults.paragraph().unwrap()
        ));
        assert!(Rc::ptr_eq(merged.heading().unwrap(), defaults.heading().unwrap()));
    }

    #[test]
    fn test_merge_leaves_inputs_alone() {
        let defaults = BlockRegistry::default();
        let snapshot = defaults.clone();
        let overrides = BlockOverrides::new().image(|_| rsx! {});

        let _ = BlockRegistry::merge(&defaults, &overrides);

        assert!(defaults == snapshot);
        assert!(!overrides.is_empty());
        assert!(BlockOverrides::new().is_empty());
    }

    #[test]
    fn test_without_removes_only_that_kind() {
        let registry = BlockRegistry::default().without(BlockKind::Image);

        assert!(!registry.contains(BlockKind::Image));
        assert!(registry.contains(BlockKind::Paragraph));
    }

    #[test]
    fn test_empty_merge_gives_only_overrides() {
        let merged = BlockRegistry::merge(
            &BlockRegistry::empty(),
            &BlockOverrides::new().quote(|_| rsx! {}),
        );

        assert!(merged.contains(BlockKind::Quote));
        assert!(!merged.contains(BlockKind::Paragraph));
    }
}
