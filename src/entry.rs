//! Entry, content type, and identifier types shared across the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel template value meaning "use the type's normal default template".
pub const DEFAULT_TEMPLATE: &str = "default";

/// Metadata key the template choice is stored under.
///
/// Mirrors the key the host platform uses for its own built-in page
/// templates, so existing tooling that inspects entry metadata keeps
/// working. Overridable via [`crate::config::PluginConfig`].
pub const TEMPLATE_META_KEY: &str = "_wp_page_template";

/// Identifier of a single entry in the host content store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered content type as reported by the host registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    /// Machine identifier, e.g. `event`.
    pub slug: String,
    /// Human-readable label, e.g. `Events`.
    pub label: String,
}

impl ContentType {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }
}

/// An addressable content item, tagged with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub content_type: String,
}

impl Entry {
    pub fn new(id: u64, content_type: impl Into<String>) -> Self {
        Self {
            id: EntryId(id),
            content_type: content_type.into(),
        }
    }
}
