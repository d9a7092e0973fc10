//! Bundle plan - the resolved output layout handed to the build step

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::{
    split_asset_name, OutputCategory, OutputTemplate, OutputTemplates, ResolvedOutputPath,
    Surface,
};
use crate::error::{ConfigurationError, PlanResult};

/// Extension of every emitted script
pub const SCRIPT_EXT: &str = "js";

/// Output layout for one build invocation
///
/// Entry outputs are fixed when the plan is created. Chunks and assets the
/// build step discovers later are added through the exposed templates and
/// never displace an entry.
#[derive(Debug, Clone, Serialize)]
pub struct BundlePlan {
    out_dir: PathBuf,
    entries: Vec<ResolvedOutputPath>,
    chunks: Vec<ResolvedOutputPath>,
    assets: Vec<ResolvedOutputPath>,
    #[serde(skip)]
    templates: OutputTemplates,
    /// Lowercased path -> owning name
    #[serde(skip)]
    taken: HashMap<String, String>,
}

impl BundlePlan {
    pub(crate) fn new(out_dir: PathBuf, templates: OutputTemplates) -> Self {
        Self {
            out_dir,
            entries: Vec::new(),
            chunks: Vec::new(),
            assets: Vec::new(),
            templates,
            taken: HashMap::new(),
        }
    }

    /// Record an entry output; two entries may never share a path
    pub(crate) fn push_entry(&mut self, resolved: ResolvedOutputPath) -> PlanResult<()> {
        let key = resolved.as_str().to_lowercase();
        if let Some(first) = self.taken.get(&key) {
            return Err(ConfigurationError::OutputCollision {
                path: resolved.as_str().to_string(),
                first: first.clone(),
                second: resolved.name().to_string(),
            });
        }
        self.taken.insert(key, resolved.name().to_string());
        self.entries.push(resolved);
        Ok(())
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn entries(&self) -> &[ResolvedOutputPath] {
        &self.entries
    }

    pub fn chunks(&self) -> &[ResolvedOutputPath] {
        &self.chunks
    }

    pub fn assets(&self) -> &[ResolvedOutputPath] {
        &self.assets
    }

    /// Resolved output for the entry called `name`
    pub fn entry(&self, name: &str) -> Option<&ResolvedOutputPath> {
        self.entries.iter().find(|e| e.name() == name)
    }

    /// Template for code-split fragments
    pub fn chunk_template(&self) -> &OutputTemplate {
        self.templates.chunk()
    }

    /// Template for non-script assets
    pub fn asset_template(&self) -> &OutputTemplate {
        self.templates.asset()
    }

    /// Place a shared code fragment
    pub fn add_chunk(&mut self, name: &str) -> PlanResult<&ResolvedOutputPath> {
        let resolved = self.templates.chunk().resolve(name, SCRIPT_EXT)?;
        let resolved = self.claim(resolved);
        self.chunks.push(resolved);
        Ok(&self.chunks[self.chunks.len() - 1])
    }

    /// Place an asset by its file name (directories are ignored)
    pub fn add_asset(&mut self, file_name: &str) -> PlanResult<&ResolvedOutputPath> {
        let (name, ext) = split_asset_name(file_name);
        let resolved = self.templates.asset().resolve(name, ext)?;
        let resolved = self.claim(resolved);
        self.assets.push(resolved);
        Ok(&self.assets[self.assets.len() - 1])
    }

    /// Reserve a unique path for a secondary output, numbering on conflict
    fn claim(&mut self, resolved: ResolvedOutputPath) -> ResolvedOutputPath {
        let unique = make_unique(resolved.as_str(), |candidate| {
            self.taken.contains_key(&candidate.to_lowercase())
        });
        if unique != resolved.as_str() {
            tracing::debug!(
                category = %resolved.category(),
                requested = resolved.as_str(),
                assigned = unique.as_str(),
                "renamed secondary output to avoid a collision"
            );
        }
        self.taken
            .insert(unique.to_lowercase(), resolved.name().to_string());
        resolved.with_path(unique)
    }

    /// Every output path in the plan
    pub fn output_paths(&self) -> BTreeSet<String> {
        self.all().map(|r| r.as_str().to_string()).collect()
    }

    /// Output paths of the entries only
    pub fn entry_paths(&self) -> BTreeSet<String> {
        self.entries.iter().map(|r| r.as_str().to_string()).collect()
    }

    /// Every output in category order
    pub fn all(&self) -> impl Iterator<Item = &ResolvedOutputPath> {
        self.entries
            .iter()
            .chain(self.chunks.iter())
            .chain(self.assets.iter())
    }

    /// Extension surfaces that have no entry in this plan
    pub fn missing_surfaces(&self) -> Vec<Surface> {
        Surface::ALL
            .into_iter()
            .filter(|s| self.entry(s.entry_name()).is_none())
            .collect()
    }

    /// Count of outputs per category
    pub fn count(&self, category: OutputCategory) -> usize {
        match category {
            OutputCategory::Entry => self.entries.len(),
            OutputCategory::Chunk => self.chunks.len(),
            OutputCategory::Asset => self.assets.len(),
        }
    }
}

/// Rollup-style de-duplication: `logo.png` becomes `logo2.png`, `logo3.png`, ...
fn make_unique(path: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(path) {
        return path.to_string();
    }
    let base_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let (stem, ext) = match path[base_start..].rfind('.') {
        Some(dot) if dot > 0 => path.split_at(base_start + dot),
        _ => (path, ""),
    };
    let mut index = 2usize;
    loop {
        let candidate = format!("{stem}{index}{ext}");
        if !taken(&candidate) {
            return candidate;
        }
        index += 1;
    }
}
