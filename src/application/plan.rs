//! Plan Use Case
//!
//! Resolves the configured entries, then places the secondary outputs the
//! build step reported (chunk names, asset files).

use std::path::PathBuf;

use crate::config::LoadedConfig;
use crate::domain::ports::FileSystem;
use crate::domain::services::{BundlePlan, BundlePlanner};
use crate::domain::value_objects::OutputCategory;
use crate::error::{ConfigurationError, PlanResult};

/// Build a planner from a loaded configuration
pub fn build_planner<F: FileSystem>(loaded: &LoadedConfig, fs: F) -> PlanResult<BundlePlanner<F>> {
    let templates = loaded.config.templates()?;
    BundlePlanner::new(loaded.root(), templates, fs)
        .with_out_dir(&loaded.config.build.out_dir)
        .with_entries(loaded.config.entries()?)
}

/// Secondary outputs to place after the entries
#[derive(Debug, Clone, Default)]
pub struct PlanRequest {
    /// Shared code fragment names
    pub chunks: Vec<String>,
    /// Asset file names or paths; only the file name is used
    pub assets: Vec<String>,
    /// Asset files found on disk
    pub asset_files: Vec<PathBuf>,
}

pub struct PlanUseCase<F> {
    fs: F,
}

impl<F: FileSystem> PlanUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Planner for one-off resolutions against the same file system
    pub fn planner(&self, loaded: &LoadedConfig) -> PlanResult<BundlePlanner<&F>> {
        build_planner(loaded, &self.fs)
    }

    pub fn execute(&self, loaded: &LoadedConfig, request: &PlanRequest) -> PlanResult<BundlePlan> {
        let planner = self.planner(loaded)?;
        let mut plan = planner.plan()?;

        for chunk in &request.chunks {
            plan.add_chunk(chunk)?;
        }
        for asset in &request.assets {
            plan.add_asset(asset)?;
        }
        for file in &request.asset_files {
            let name = file.file_name().and_then(|n| n.to_str()).ok_or_else(|| {
                ConfigurationError::InvalidOutputName {
                    category: OutputCategory::Asset,
                    name: file.display().to_string(),
                    reason: "file name is not valid UTF-8".to_string(),
                }
            })?;
            plan.add_asset(name)?;
        }

        Ok(plan)
    }
}
