//! In-memory host facility implementations.
//!
//! These back the crate's own tests and let embedders exercise the
//! selector and resolver without a running host platform. They mirror
//! the real facilities' observable behavior only: the metadata store is
//! a flat map, the authorizer an allow-list, the edit-screen registry a
//! recorder of attached controls.

use crate::entry::{ContentType, EntryId};
use crate::error::{Result, RetemplateError};
use crate::host::{Authorizer, ContentTypeRegistry, EditScreenRegistry, MetadataStore};
use std::collections::{BTreeSet, HashMap};

/// In-memory content-type registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    types: Vec<ContentType>,
}

impl MemoryRegistry {
    /// Registry populated from `(slug, label)` pairs.
    pub fn with_types(pairs: &[(&str, &str)]) -> Self {
        Self {
            types: pairs
                .iter()
                .map(|(slug, label)| ContentType::new(*slug, *label))
                .collect(),
        }
    }
}

impl ContentTypeRegistry for MemoryRegistry {
    fn public_types(&self) -> Vec<ContentType> {
        self.types.clone()
    }
}

/// In-memory metadata store.
///
/// `fail_next` makes the next read or write report a store failure, for
/// testing error propagation.
#[derive(Debug, Clone, Default)]
pub struct MemoryMetadataStore {
    values: HashMap<(EntryId, String), String>,
    fail_next: bool,
}

impl MemoryMetadataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next metadata access fail.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    fn check_failure(&mut self, entry: EntryId) -> Result<()> {
        if self.fail_next {
            self.fail_next = false;
            return Err(RetemplateError::Metadata {
                entry,
                message: "simulated store failure".into(),
            });
        }
        Ok(())
    }
}

impl MetadataStore for MemoryMetadataStore {
    fn get_meta(&self, entry: EntryId, key: &str) -> Result<Option<String>> {
        if self.fail_next {
            return Err(RetemplateError::Metadata {
                entry,
                message: "simulated store failure".into(),
            });
        }
        Ok(self.values.get(&(entry, key.to_string())).cloned())
    }

    fn set_meta(&mut self, entry: EntryId, key: &str, value: &str) -> Result<()> {
        self.check_failure(entry)?;
        self.values
            .insert((entry, key.to_string()), value.to_string());
        Ok(())
    }
}

/// Allow-list authorizer.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuthorizer {
    allow_all: bool,
    allowed: BTreeSet<EntryId>,
}

impl MemoryAuthorizer {
    /// Authorizer that permits editing every entry.
    pub fn allow_all() -> Self {
        Self {
            allow_all: true,
            allowed: BTreeSet::new(),
        }
    }

    /// Authorizer that permits editing no entry.
    pub fn deny_all() -> Self {
        Self::default()
    }

    /// Authorizer that permits editing only the listed entries.
    pub fn allow_only(entries: impl IntoIterator<Item = EntryId>) -> Self {
        Self {
            allow_all: false,
            allowed: entries.into_iter().collect(),
        }
    }
}

impl Authorizer for MemoryAuthorizer {
    fn can_edit(&self, entry: EntryId) -> bool {
        self.allow_all || self.allowed.contains(&entry)
    }
}

/// Recording edit-screen registry.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditScreens {
    controls: BTreeSet<(String, String)>,
}

impl MemoryEditScreens {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any control is attached to the content type's edit screen.
    pub fn has_control(&self, content_type: &str) -> bool {
        self.controls.iter().any(|(ct, _)| ct == content_type)
    }

    /// Number of attached controls across all content types.
    pub fn control_count(&self) -> usize {
        self.controls.len()
    }
}

impl EditScreenRegistry for MemoryEditScreens {
    fn add_control(&mut self, content_type: &str, control_id: &str, _title: &str) {
        // BTreeSet keys make re-registration a no-op, like a real host.
        self.controls
            .insert((content_type.to_string(), control_id.to_string()));
    }
}
