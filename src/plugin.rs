//! Process-level wiring.
//!
//! The host application builds one [`Plugin`] at startup and hands the
//! [`TemplateSelector`] to its admin-path handler and the
//! [`TemplateResolver`] to its public-render handler. No ambient global
//! state is involved; everything the components need travels by
//! reference.

use crate::config::PluginConfig;
use crate::filter::TypeFilter;
use crate::host::ContentTypeRegistry;
use crate::resolver::TemplateResolver;
use crate::selector::TemplateSelector;
use crate::theme::Theme;

/// The plugin, instantiated once at application wiring time.
#[derive(Debug, Clone)]
pub struct Plugin {
    selector: TemplateSelector,
    resolver: TemplateResolver,
}

impl Plugin {
    /// Wire up both components from the given config and host registry.
    pub fn new(config: PluginConfig, registry: &dyn ContentTypeRegistry) -> Self {
        let filter = TypeFilter::with_reserved(registry, &config.reserved_types);
        let theme = Theme::new(&config.theme_dir);
        Self {
            selector: TemplateSelector::new(config.clone(), filter.clone(), theme.clone()),
            resolver: TemplateResolver::new(config, filter, theme),
        }
    }

    /// The admin-side component, for the edit-screen and save hooks.
    pub fn selector(&self) -> &TemplateSelector {
        &self.selector
    }

    /// The public-render component, for the template-selection hook.
    pub fn resolver(&self) -> &TemplateResolver {
        &self.resolver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryRegistry;

    #[test]
    fn plugin_wires_both_components() {
        let registry = MemoryRegistry::with_types(&[("event", "Events")]);
        let plugin = Plugin::new(PluginConfig::default(), &registry);

        // Both handles point at components built from the same filter.
        let _ = plugin.selector();
        let _ = plugin.resolver();
    }
}
