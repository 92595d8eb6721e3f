//! Admin-side template selector.
//!
//! This module handles the edit-screen side of the plugin:
//! - Control registration per qualifying content type in [`TemplateSelector::register`]
//! - Pure dropdown option construction in [`options`]
//! - Markup emission in [`markup`]
//! - Submitted-value sanitization in [`sanitize`]
//!
//! # Example
//!
//! ```
//! use retemplate::selector::options;
//!
//! // With no discovered templates, the dropdown is just "Default".
//! let rows = options::build(&[], "");
//! assert_eq!(rows.len(), 1);
//! assert!(rows[0].selected);
//! ```

pub mod markup;
pub mod options;
pub mod sanitize;

pub use markup::render_select;
pub use options::TemplateOption;
pub use sanitize::sanitize_text;

use crate::config::PluginConfig;
use crate::entry::{Entry, EntryId};
use crate::error::Result;
use crate::filter::TypeFilter;
use crate::host::{Authorizer, EditScreenRegistry, MetadataStore};
use crate::theme::Theme;

/// Edit-screen component: registers the dropdown control and persists
/// choices.
///
/// Instantiated once at wiring time (usually via
/// [`crate::plugin::Plugin`]); host facilities are passed per call so
/// each request uses its own handles.
#[derive(Debug, Clone)]
pub struct TemplateSelector {
    config: PluginConfig,
    filter: TypeFilter,
    theme: Theme,
}

impl TemplateSelector {
    pub fn new(config: PluginConfig, filter: TypeFilter, theme: Theme) -> Self {
        Self {
            config,
            filter,
            theme,
        }
    }

    /// Attach the template control to each qualifying content type's edit
    /// screen, provided at least one theme template is discoverable.
    pub fn register(&self, screens: &mut dyn EditScreenRegistry) -> Result<()> {
        let templates = self.theme.templates()?;
        if templates.is_empty() {
            tracing::debug!(
                theme_dir = %self.theme.dir().display(),
                "No theme templates discovered; selector control not registered"
            );
            return Ok(());
        }

        for slug in self.filter.slugs() {
            screens.add_control(slug, &self.config.control_id, &self.config.control_title);
        }
        Ok(())
    }

    /// Build the dropdown option list for an entry's edit screen.
    ///
    /// An absent or stale stored choice normalizes to selecting "Default".
    pub fn options(&self, entry: &Entry, store: &dyn MetadataStore) -> Result<Vec<TemplateOption>> {
        let saved = store
            .get_meta(entry.id, &self.config.meta_key)?
            .unwrap_or_default();
        Ok(options::build(&self.theme.templates()?, &saved))
    }

    /// Render the dropdown control markup for an entry's edit screen.
    pub fn render_control(&self, entry: &Entry, store: &dyn MetadataStore) -> Result<String> {
        let rows = self.options(entry, store)?;
        Ok(markup::render_select(&self.config.control_id, &rows))
    }

    /// Persist a submitted template choice.
    ///
    /// Unauthorized callers are a silent no-op; the entry id comes back
    /// unchanged either way. The value is stored sanitized but otherwise
    /// unvalidated; values naming no real template degrade gracefully at
    /// render time.
    pub fn save(
        &self,
        entry: EntryId,
        submitted: &str,
        auth: &dyn Authorizer,
        store: &mut dyn MetadataStore,
    ) -> Result<EntryId> {
        if !auth.can_edit(entry) {
            tracing::debug!(%entry, "Unauthorized template save ignored");
            return Ok(entry);
        }

        let value = sanitize::sanitize_text(submitted);
        store.set_meta(entry, &self.config.meta_key, &value)?;
        tracing::debug!(%entry, template = %value, "Template choice saved");
        Ok(entry)
    }
}
