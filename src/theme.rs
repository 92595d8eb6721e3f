//! Theme template discovery and path resolution.
//!
//! A theme file becomes a selectable template by carrying a
//! `Template Name:` header near the top, inside whatever comment syntax
//! the file uses:
//!
//! ```php
//! <?php
//! /* Template Name: Full Width */
//! ```
//!
//! Discovery scans the active theme directory and one level of
//! subdirectories. A missing theme directory yields an empty list, not
//! an error, so the selector simply registers nothing.

use crate::error::{Result, RetemplateError};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Header that marks a theme file as a selectable template.
const TEMPLATE_NAME_HEADER: &str = "Template Name:";

/// How many leading lines of a file are searched for the header.
const HEADER_SEARCH_LINES: usize = 8;

/// A discovered theme template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeTemplate {
    /// Path relative to the theme directory.
    pub file: PathBuf,
    /// Display name from the file's `Template Name:` header.
    pub name: String,
}

impl ThemeTemplate {
    /// The value stored in entry metadata when this template is chosen.
    pub fn value(&self) -> String {
        self.file.display().to_string()
    }
}

/// The active theme directory.
#[derive(Debug, Clone)]
pub struct Theme {
    dir: PathBuf,
}

impl Theme {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Discover selectable templates, sorted by display name.
    pub fn templates(&self) -> Result<Vec<ThemeTemplate>> {
        let mut found = Vec::new();
        if self.dir.is_dir() {
            scan_dir(&self.dir, &self.dir, 0, &mut found)?;
        }
        found.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(found)
    }

    /// Join a bare template value against the theme directory.
    ///
    /// Used by the resolver when the stored value does not name an
    /// existing file on its own.
    pub fn candidate_path(&self, value: &str) -> PathBuf {
        self.dir.join(value)
    }
}

fn scan_dir(root: &Path, dir: &Path, depth: usize, found: &mut Vec<ThemeTemplate>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| RetemplateError::ThemeScan {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            if depth == 0 {
                scan_dir(root, &path, depth + 1, found)?;
            }
        } else if let Some(name) = template_name(&path) {
            let file = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            found.push(ThemeTemplate { file, name });
        }
    }

    Ok(())
}

/// Extract the template display name from a file's header, if present.
fn template_name(path: &Path) -> Option<String> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Skipping unreadable theme file {}: {}", path.display(), e);
            return None;
        }
    };

    for line in content.lines().take(HEADER_SEARCH_LINES) {
        if let Some(idx) = line.find(TEMPLATE_NAME_HEADER) {
            let rest = &line[idx + TEMPLATE_NAME_HEADER.len()..];
            let name = rest
                .trim()
                .trim_end_matches("*/")
                .trim_end_matches("-->")
                .trim();
            if !name.is_empty() {
                return Some(name.to_string());
            }
        }
    }

    None
}
