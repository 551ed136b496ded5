use super::{Renderer, same_renderer};
use crate::ui::components::{Bold, InlineCode, Italic, ModifierProps, Strikethrough, Underline};
use blocks_renderer_engine::Modifier;
use dioxus::prelude::*;
use std::collections::BTreeMap;
use std::rc::Rc;

fn builtin(modifier: Modifier) -> Renderer<ModifierProps> {
    match modifier {
        Modifier::Bold => Rc::new(Bold),
        Modifier::Italic => Rc::new(Italic),
        Modifier::Underline => Rc::new(Underline),
        Modifier::Strikethrough => Rc::new(Strikethrough),
        Modifier::Code => Rc::new(InlineCode),
    }
}

/// Modifier name to wrapper renderer. A modifier with no entry is left off
/// the text it is set on and reported as missing.
#[derive(Clone)]
pub struct ModifierRegistry {
    renderers: BTreeMap<Modifier, Renderer<ModifierProps>>,
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self {
            renderers: Modifier::ALL
                .into_iter()
                .map(|modifier| (modifier, builtin(modifier)))
                .collect(),
        }
    }
}

impl ModifierRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: BTreeMap::new(),
        }
    }

    pub fn merge(defaults: &ModifierRegistry, overrides: &ModifierOverrides) -> Self {
        let mut renderers = defaults.renderers.clone();
        for (modifier, render) in &overrides.0.renderers {
            renderers.insert(*modifier, render.clone());
        }
        Self { renderers }
    }

    pub fn without(mut self, modifier: Modifier) -> Self {
        self.renderers.remove(&modifier);
        self
    }

    pub fn get(&self, modifier: Modifier) -> Option<&Renderer<ModifierProps>> {
        self.renderers.get(&modifier)
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.renderers.contains_key(&modifier)
    }
}

impl PartialEq for ModifierRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.renderers.len() == other.renderers.len()
            && Modifier::ALL
                .into_iter()
                .all(|modifier| same_renderer(self.get(modifier), other.get(modifier)))
    }
}

/// Caller supplied modifier renderers, layered over the defaults
#[derive(Clone, PartialEq)]
pub struct ModifierOverrides(ModifierRegistry);

impl Default for ModifierOverrides {
    fn default() -> Self {
        Self(ModifierRegistry::empty())
    }
}

impl ModifierOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.renderers.is_empty()
    }

    pub fn set(
        mut self,
        modifier: Modifier,
        render: impl Fn(ModifierProps) -> Element + 'static,
    ) -> Self {
        self.0.renderers.insert(modifier, Rc::new(render));
        self
    }

    pub fn bold(self, render: impl Fn(ModifierProps) -> Element + 'static) -> Self {
        self.set(Modifier::Bold, render)
    }

    pub fn italic(self, render: impl Fn(ModifierProps) -> Element + 'static) -> Self {
        self.set(Modifier::Italic, render)
    }

    pub fn underline(self, render: impl Fn(ModifierProps) -> Element + 'static) -> Self {
        self.set(Modifier::Underline, render)
    }

    pub fn strikethrough(self, render: impl Fn(ModifierProps) -> Element + 'static) -> Self {
        self.set(Modifier::Strikethrough, render)
    }

    pub fn code(self, render: impl Fn(ModifierProps) -> Element + 'static) -> Self {
        self.set(Modifier::Code, render)
    }
}
