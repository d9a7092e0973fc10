//! Resolved output path value object
//!
//! Output paths are always `/`-separated and relative to the build's
//! output directory, independent of the host platform.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::OutputCategory;

/// A template with every placeholder substituted
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ResolvedOutputPath {
    category: OutputCategory,
    name: String,
    path: String,
}

impl ResolvedOutputPath {
    pub fn new(category: OutputCategory, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn category(&self) -> OutputCategory {
        self.category
    }

    /// Entry, chunk or asset name substituted for `[name]`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Location of this output on disk below `out_dir`
    pub fn under(&self, out_dir: &Path) -> PathBuf {
        self.path
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(out_dir.to_path_buf(), |acc, part| acc.join(part))
    }

    pub(crate) fn with_path(mut self, path: String) -> Self {
        self.path = path;
        self
    }
}

impl std::fmt::Display for ResolvedOutputPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for ResolvedOutputPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Check that a name can be substituted for `[name]` without escaping
/// the output directory.
pub(crate) fn check_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("name is empty");
    }
    if name.starts_with('/') || name.starts_with('\\') {
        return Err("name is an absolute path");
    }
    if name.split(['/', '\\']).any(|part| part == "..") {
        return Err("name contains '..'");
    }
    Ok(())
}

/// Split an asset file name into the `[name]` and `[ext]` parts.
///
/// Directories are dropped; a leading dot belongs to the name, so
/// `.nojekyll` has no extension.
pub fn split_asset_name(file_name: &str) -> (&str, &str) {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);
    match base.rfind('.') {
        Some(idx) if idx > 0 => (&base[..idx], &base[idx + 1..]),
        _ => (base, ""),
    }
}
