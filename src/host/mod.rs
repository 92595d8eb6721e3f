//! Host platform seams.
//!
//! This module provides:
//! - [`ContentTypeRegistry`] for enumerating registered public content types
//! - [`MetadataStore`] for per-entry string metadata
//! - [`Authorizer`] for edit-permission checks
//! - [`EditScreenRegistry`] for attaching controls to admin edit screens
//! - In-memory implementations of all four in [`memory`]
//!
//! The host platform owns all four facilities; the traits only describe
//! the narrow slice this crate touches. The in-memory implementations are
//! part of the public API so embedders can exercise the components
//! without a running host.

pub mod memory;

pub use memory::{MemoryAuthorizer, MemoryEditScreens, MemoryMetadataStore, MemoryRegistry};

use crate::entry::{ContentType, EntryId};
use crate::error::Result;

/// Read access to the host's registry of public content types.
pub trait ContentTypeRegistry {
    /// All content types registered as publicly visible.
    fn public_types(&self) -> Vec<ContentType>;
}

/// Per-entry string metadata, keyed by entry id and metadata key.
///
/// Reads and writes are single synchronous calls; the host's own
/// primitives provide whatever concurrency safety the backing store
/// needs. Writes are full overwrites, never merges.
pub trait MetadataStore {
    fn get_meta(&self, entry: EntryId, key: &str) -> Result<Option<String>>;

    fn set_meta(&mut self, entry: EntryId, key: &str, value: &str) -> Result<()>;
}

/// Host authorization facility.
pub trait Authorizer {
    /// Whether the current user may edit the given entry.
    fn can_edit(&self, entry: EntryId) -> bool;
}

/// The admin edit-screen extension point.
///
/// Hosts treat re-registration of an already-registered control id as a
/// no-op, so registration is idempotent per request.
pub trait EditScreenRegistry {
    /// Attach a control with the given id and title to a content type's
    /// edit screen.
    fn add_control(&mut self, content_type: &str, control_id: &str, title: &str);
}
