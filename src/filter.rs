//! Content-type filtering.
//!
//! The template selector never applies to the platform's built-in types;
//! those keep their native template handling. Everything else that is
//! registered as public qualifies.

use crate::host::ContentTypeRegistry;
use std::collections::BTreeSet;

/// Content types that keep their built-in template handling.
pub const RESERVED_TYPES: [&str; 3] = ["attachment", "page", "post"];

/// The set of content types the template selector applies to.
///
/// Built once at wiring time from the host registry and shared by the
/// admin selector and the front-end resolver.
#[derive(Debug, Clone, Default)]
pub struct TypeFilter {
    slugs: BTreeSet<String>,
}

impl TypeFilter {
    /// Build the filter from the host registry using the default reserved set.
    pub fn from_registry(registry: &dyn ContentTypeRegistry) -> Self {
        let reserved: Vec<String> = RESERVED_TYPES.iter().map(|s| s.to_string()).collect();
        Self::with_reserved(registry, &reserved)
    }

    /// Build the filter from the host registry, excluding `reserved` slugs.
    pub fn with_reserved(registry: &dyn ContentTypeRegistry, reserved: &[String]) -> Self {
        let slugs = registry
            .public_types()
            .into_iter()
            .map(|t| t.slug)
            .filter(|slug| !reserved.iter().any(|r| r == slug))
            .collect();
        Self { slugs }
    }

    /// Qualifying content-type slugs, in sorted order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.slugs.iter().map(String::as_str)
    }

    /// Whether the template selector applies to this content type.
    pub fn is_applicable(&self, content_type: &str) -> bool {
        self.slugs.contains(content_type)
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

/// Human-readable labels of the qualifying content types, for admin display.
pub fn type_labels(registry: &dyn ContentTypeRegistry) -> Vec<String> {
    let filter = TypeFilter::from_registry(registry);
    registry
        .public_types()
        .into_iter()
        .filter(|t| filter.is_applicable(&t.slug))
        .map(|t| t.label)
        .collect()
}
