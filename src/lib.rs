//! Retemplate - per-entry render template overrides for custom content types.
//!
//! Retemplate lets an editor assign an alternate rendering template to
//! entries of any public content type beyond the built-in "page" type. The
//! chosen template name is stored as metadata on the entry and resolved
//! into an actual template file when the entry is rendered publicly.
//!
//! The crate is an integration layer: the host platform owns the content
//! registry, the metadata store, authorization, and request routing, all
//! reached through the traits in [`host`]. Retemplate contributes the
//! content-type filtering, the edit-screen dropdown, and the render-time
//! template substitution.
//!
//! # Modules
//!
//! - [`config`] - Wiring-time plugin configuration
//! - [`entry`] - Entry, content type, and identifier types
//! - [`error`] - Error types and result aliases
//! - [`filter`] - Content-type filtering
//! - [`host`] - Host platform seams and in-memory test doubles
//! - [`plugin`] - Process-level wiring of the two components
//! - [`resolver`] - Front-end template resolution
//! - [`selector`] - Admin-side template selector
//! - [`theme`] - Theme template discovery
//!
//! # Example
//!
//! ```
//! use retemplate::config::PluginConfig;
//! use retemplate::entry::Entry;
//! use retemplate::host::{MemoryMetadataStore, MemoryRegistry};
//! use retemplate::plugin::Plugin;
//!
//! let registry = MemoryRegistry::with_types(&[("post", "Posts"), ("event", "Events")]);
//! let plugin = Plugin::new(PluginConfig::default(), &registry);
//! let store = MemoryMetadataStore::new();
//!
//! // No template choice saved yet, so the host's default wins.
//! let entry = Entry::new(7, "event");
//! let path = plugin
//!     .resolver()
//!     .resolve("single-event.php".as_ref(), &entry, &store)
//!     .unwrap();
//! assert_eq!(path.to_string_lossy(), "single-event.php");
//! ```
//!
//! For filesystem-backed template discovery, see the integration tests.

pub mod config;
pub mod entry;
pub mod error;
pub mod filter;
pub mod host;
pub mod plugin;
pub mod resolver;
pub mod selector;
pub mod theme;

pub use error::{Result, RetemplateError};
