//! EntryPoint entity - a named source file that becomes its own bundle

use std::path::{Path, PathBuf};

use crate::domain::value_objects::Surface;
use crate::error::{ConfigurationError, PlanResult};

/// Named source file registered under `build.rollupOptions.input`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    name: String,
    source: PathBuf,
}

impl EntryPoint {
    /// Create an entry, rejecting names that cannot become a path segment
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> PlanResult<Self> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.contains(['/', '\\']) {
            Some("name contains a path separator")
        } else if name == "." || name == ".." {
            Some("name is a relative path component")
        } else if name.contains(['[', ']']) {
            Some("name contains template brackets")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(ConfigurationError::InvalidEntryName {
                entry: name,
                reason: reason.to_string(),
            });
        }
        Ok(Self {
            name,
            source: source.into(),
        })
    }

    /// Entry for one of the three extension surfaces at its conventional path
    pub fn for_surface(surface: Surface) -> Self {
        Self {
            name: surface.entry_name().to_string(),
            source: PathBuf::from(surface.default_source()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Source path as declared (relative to the project root unless absolute)
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Extension surface this entry ships, if it is one of the three
    pub fn surface(&self) -> Option<Surface> {
        Surface::from_entry_name(&self.name)
    }
}
