//! Front-end template resolution.

use crate::config::PluginConfig;
use crate::entry::{Entry, DEFAULT_TEMPLATE};
use crate::error::Result;
use crate::filter::TypeFilter;
use crate::host::MetadataStore;
use crate::theme::Theme;
use std::path::{Path, PathBuf};

/// Public-render component: substitutes an entry's saved template for
/// the host's default during template selection.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    config: PluginConfig,
    filter: TypeFilter,
    theme: Theme,
}

impl TemplateResolver {
    pub fn new(config: PluginConfig, filter: TypeFilter, theme: Theme) -> Self {
        Self {
            config,
            filter,
            theme,
        }
    }

    /// Resolve the template path to render `entry` with.
    ///
    /// Non-qualifying content types and entries without a saved choice
    /// pass the original template through unchanged. A saved choice that
    /// names no existing file is rewritten against the theme directory
    /// and returned without a second existence check; a doubly-missing
    /// file is the host loader's to report.
    pub fn resolve(
        &self,
        original_template: &Path,
        entry: &Entry,
        store: &dyn MetadataStore,
    ) -> Result<PathBuf> {
        if !self.filter.is_applicable(&entry.content_type) {
            return Ok(original_template.to_path_buf());
        }

        let saved = store
            .get_meta(entry.id, &self.config.meta_key)?
            .unwrap_or_default();
        if saved.is_empty() || saved == DEFAULT_TEMPLATE {
            return Ok(original_template.to_path_buf());
        }

        let candidate = PathBuf::from(&saved);
        if candidate.exists() {
            tracing::debug!(entry = %entry.id, template = %saved, "Using saved template");
            return Ok(candidate);
        }

        let rewritten = self.theme.candidate_path(&saved);
        tracing::warn!(
            entry = %entry.id,
            template = %saved,
            "Saved template not found as given; resolving against theme directory"
        );
        Ok(rewritten)
    }
}
