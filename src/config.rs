//! Wiring-time configuration for the plugin components.
//!
//! All fields carry defaults matching the host platform's conventions, so
//! `PluginConfig::default()` with a theme directory filled in is the
//! common case. The struct deserializes with `#[serde(default)]` so a
//! host can feed it from its own configuration source.

use crate::entry::TEMPLATE_META_KEY;
use crate::filter::RESERVED_TYPES;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for [`crate::plugin::Plugin`] and its components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Metadata key the template choice is stored under.
    pub meta_key: String,
    /// Content types that keep their built-in template handling.
    pub reserved_types: Vec<String>,
    /// Form-control id used on the edit screen.
    pub control_id: String,
    /// Title shown on the edit-screen control.
    pub control_title: String,
    /// Active theme directory templates are discovered in and bare
    /// template filenames are resolved against.
    pub theme_dir: PathBuf,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            meta_key: TEMPLATE_META_KEY.to_string(),
            reserved_types: RESERVED_TYPES.iter().map(|s| s.to_string()).collect(),
            control_id: "page_template".to_string(),
            control_title: "Template".to_string(),
            theme_dir: PathBuf::new(),
        }
    }
}

impl PluginConfig {
    /// Default configuration with the given theme directory.
    pub fn with_theme_dir(theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_dir: theme_dir.into(),
            ..Self::default()
        }
    }
}
