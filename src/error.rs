//! Error types for retemplate operations.
//!
//! This module defines [`RetemplateError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RetemplateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RetemplateError::Other`) for unexpected errors
//! - Missing or stale stored values are never errors; they normalize to the
//!   default template behavior at the call site

use crate::entry::EntryId;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for retemplate operations.
#[derive(Debug, Error)]
pub enum RetemplateError {
    /// Theme directory could not be scanned for templates.
    #[error("Failed to scan theme directory {path}: {message}")]
    ThemeScan { path: PathBuf, message: String },

    /// Metadata store read or write failed for an entry.
    #[error("Metadata access failed for entry {entry}: {message}")]
    Metadata { entry: EntryId, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for retemplate operations.
pub type Result<T> = std::result::Result<T, RetemplateError>;
