//! Lookup tables from block kinds and modifier names to renderers.
//!
//! A renderer is any `Fn(Props) -> Element`, so both `#[component]`
//! functions and closures can be registered. The defaults are the components
//! in [`crate::ui::components`]; callers layer overrides on top per key.

mod blocks;
mod modifiers;

pub use blocks::{BlockOverrides, BlockRegistry};
pub use modifiers::{ModifierOverrides, ModifierRegistry};

use blocks_renderer_config::RenderConfig;
use blocks_renderer_engine::{BlockKind, Modifier};
use dioxus::prelude::Element;
use std::rc::Rc;

pub type Renderer<P> = Rc<dyn Fn(P) -> Element>;

/// Renderers compare by identity
fn same_renderer<P>(a: Option<&Renderer<P>>, b: Option<&Renderer<P>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// The effective block and modifier registries for a render pass
#[derive(Clone, Default, PartialEq)]
pub struct Components {
    pub blocks: BlockRegistry,
    pub modifiers: ModifierRegistry,
}

impl Components {
    /// Defaults with `blocks` and `modifiers` merged over them
    pub fn new(blocks: &BlockOverrides, modifiers: &ModifierOverrides) -> Self {
        Self {
            blocks: BlockRegistry::merge(&BlockRegistry::default(), blocks),
            modifiers: ModifierRegistry::merge(&ModifierRegistry::default(), modifiers),
        }
    }

    /// Remove the kinds and modifiers the configuration disables
    pub fn with_config(mut self, config: &RenderConfig) -> Self {
        for name in &config.disabled_blocks {
            match name.parse::<BlockKind>() {
                Ok(kind) => self.blocks = self.blocks.without(kind),
                Err(_) => log::debug!("Ignoring unknown block kind \"{name}\" in disabled_blocks"),
            }
        }
        for name in &config.disabled_modifiers {
            match name.parse::<Modifier>() {
                Ok(modifier) => self.modifiers = self.modifiers.without(modifier),
                Err(_) => {
                    log::debug!("Ignoring unknown modifier \"{name}\" in disabled_modifiers")
                }
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_disables_known_names() {
        let config = RenderConfig {
            disabled_blocks: vec!["image".to_string(), "sidebar".to_string()],
            disabled_modifiers: vec!["code".to_string(), "sparkle".to_string()],
            diagnostics: true,
        };

        let components = Components::default().with_config(&config);

        assert!(!components.blocks.contains(BlockKind::Image));
        assert!(components.blocks.contains(BlockKind::Paragraph));
        assert!(!components.modifiers.contains(Modifier::Code));
        assert!(components.modifiers.contains(Modifier::Bold));
    }

    #[test]
    fn test_default_config_changes_nothing() {
        let defaults = Components::default();
        let components = defaults.clone().with_config(&RenderConfig::default());
        assert!(components == defaults);
    }

    #[test]
    fn test_new_without_overrides_equals_defaults() {
        let components = Components::new(&BlockOverrides::new(), &ModifierOverrides::new());
        for kind in BlockKind::ALL {
            assert!(components.blocks.contains(kind));
        }
        for modifier in Modifier::ALL {
            assert!(components.modifiers.contains(modifier));
        }
    }
}
