//! Bundling planner
//!
//! Maps each declared entry point to its output path under the entry
//! template and hands the chunk/asset templates to the build step. The
//! only I/O is an existence probe per entry source, done through the
//! `FileSystem` port.

use std::path::{Path, PathBuf};

use crate::domain::entities::EntryPoint;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{
    split_asset_name, OutputCategory, OutputTemplate, OutputTemplates, ResolvedOutputPath,
};
use crate::error::{ConfigurationError, PlanResult};

use super::plan::{BundlePlan, SCRIPT_EXT};

/// Default output directory, relative to the project root
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Resolves entry points into a `BundlePlan`
#[derive(Debug, Clone)]
pub struct BundlePlanner<F> {
    root: PathBuf,
    out_dir: PathBuf,
    /// Kept sorted by name so planning order is stable
    entries: Vec<EntryPoint>,
    templates: OutputTemplates,
    fs: F,
}

impl<F: FileSystem> BundlePlanner<F> {
    /// Create a planner with no entries
    pub fn new(root: impl Into<PathBuf>, templates: OutputTemplates, fs: F) -> Self {
        Self {
            root: root.into(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            entries: Vec::new(),
            templates,
            fs,
        }
    }

    pub fn with_out_dir(mut self, out_dir: impl Into<PathBuf>) -> Self {
        self.out_dir = out_dir.into();
        self
    }

    /// Register an entry; names must be unique
    pub fn with_entry(mut self, entry: EntryPoint) -> PlanResult<Self> {
        match self
            .entries
            .binary_search_by(|e| e.name().cmp(entry.name()))
        {
            Ok(_) => Err(ConfigurationError::DuplicateEntry {
                entry: entry.name().to_string(),
            }),
            Err(pos) => {
                self.entries.insert(pos, entry);
                Ok(self)
            }
        }
    }

    pub fn with_entries(self, entries: impl IntoIterator<Item = EntryPoint>) -> PlanResult<Self> {
        entries.into_iter().try_fold(self, Self::with_entry)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn entries(&self) -> &[EntryPoint] {
        &self.entries
    }

    pub fn templates(&self) -> &OutputTemplates {
        &self.templates
    }

    pub fn entry(&self, name: &str) -> Option<&EntryPoint> {
        self.entries
            .binary_search_by(|e| e.name().cmp(name))
            .ok()
            .map(|idx| &self.entries[idx])
    }

    /// Absolute (or root-relative) location of an entry's source
    pub fn source_path(&self, entry: &EntryPoint) -> PathBuf {
        self.root.join(entry.source())
    }

    /// Resolve a declared entry under an arbitrary template.
    ///
    /// Fails when the name is not declared or its source is missing. The
    /// result depends only on the arguments and the declared entries.
    pub fn resolve(&self, entry_name: &str, template: &OutputTemplate) -> PlanResult<ResolvedOutputPath> {
        let entry = self
            .entry(entry_name)
            .ok_or_else(|| ConfigurationError::UnknownEntry {
                entry: entry_name.to_string(),
            })?;
        self.check_source(entry)?;
        render_entry(entry, template)
    }

    /// Resolve a declared entry under the entry template
    pub fn resolve_entry(&self, entry_name: &str) -> PlanResult<ResolvedOutputPath> {
        self.resolve(entry_name, self.templates.entry())
    }

    /// Resolve a discovered shared-code fragment under the chunk template
    pub fn resolve_chunk(&self, name: &str) -> PlanResult<ResolvedOutputPath> {
        self.templates.chunk().resolve(name, SCRIPT_EXT)
    }

    /// Resolve a discovered asset file under the asset template
    pub fn resolve_asset(&self, file_name: &str) -> PlanResult<ResolvedOutputPath> {
        let (name, ext) = split_asset_name(file_name);
        self.templates.asset().resolve(name, ext)
    }

    /// Resolve every entry, stopping at the first problem
    pub fn plan(&self) -> PlanResult<BundlePlan> {
        let mut plan = self.empty_plan();
        for entry in &self.entries {
            let resolved = self.resolve(entry.name(), self.templates.entry())?;
            tracing::debug!(
                entry = entry.name(),
                source = %entry.source().display(),
                output = resolved.as_str(),
                "resolved entry"
            );
            plan.push_entry(resolved).inspect_err(|e| {
                tracing::warn!(error = %e, "entry output collision");
            })?;
        }
        tracing::info!(entries = plan.entries().len(), "planned bundle outputs");
        Ok(plan)
    }

    /// Every missing or unreadable entry source
    pub fn check_sources(&self) -> Vec<ConfigurationError> {
        self.entries
            .iter()
            .filter_map(|entry| self.check_source(entry).err())
            .collect()
    }

    /// Every pair of entries that would overwrite each other
    pub fn check_collisions(&self) -> Vec<ConfigurationError> {
        let mut plan = self.empty_plan();
        let mut errors = Vec::new();
        for entry in &self.entries {
            let outcome = render_entry(entry, self.templates.entry())
                .and_then(|resolved| plan.push_entry(resolved));
            if let Err(e) = outcome {
                errors.push(e);
            }
        }
        errors
    }

    /// Same checks as `plan`, reporting everything instead of the first error
    pub fn validate(&self) -> Vec<ConfigurationError> {
        let mut errors = self.check_sources();
        errors.extend(self.check_collisions());
        errors
    }

    fn empty_plan(&self) -> BundlePlan {
        BundlePlan::new(self.root.join(&self.out_dir), self.templates.clone())
    }

    fn check_source(&self, entry: &EntryPoint) -> PlanResult<()> {
        let path = self.source_path(entry);
        if !self.fs.exists(&path) {
            return Err(ConfigurationError::MissingEntrySource {
                entry: entry.name().to_string(),
                path,
            });
        }
        if !self.fs.is_file(&path) {
            return Err(ConfigurationError::UnreadableEntrySource {
                entry: entry.name().to_string(),
                path,
            });
        }
        Ok(())
    }
}

/// `[ext]` in an entry or chunk template is always the emitted script
/// extension; assets keep their own.
fn render_entry(entry: &EntryPoint, template: &OutputTemplate) -> PlanResult<ResolvedOutputPath> {
    let ext = if template.category().is_script() {
        SCRIPT_EXT
    } else {
        entry
            .source()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
    };
    let resolved = template.resolve(entry.name(), ext)?;
    Ok(ResolvedOutputPath::new(
        OutputCategory::Entry,
        entry.name(),
        resolved.as_str(),
    ))
}
