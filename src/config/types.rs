//! Configuration type definitions
//!
//! Key names mirror Vite's `build.rollupOptions` so an existing
//! `vite.config.ts` translates line for line.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::EntryPoint;
use crate::domain::services::DEFAULT_OUT_DIR;
use crate::domain::value_objects::{OutputCategory, OutputTemplates, Surface};
use crate::error::{ConfigurationError, PlanResult};

use super::loader::{self, ConfigWarning};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Project root, relative to the config file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[build]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    #[serde(default)]
    pub rollup_options: RollupOptions,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            rollup_options: RollupOptions::default(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUT_DIR)
}

/// `[build.rollupOptions]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupOptions {
    /// Entry name -> source path. Declaring the table replaces the
    /// defaults entirely.
    #[serde(default = "default_input")]
    pub input: BTreeMap<String, PathBuf>,

    #[serde(default)]
    pub output: OutputOptions,
}

impl Default for RollupOptions {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: OutputOptions::default(),
        }
    }
}

fn default_input() -> BTreeMap<String, PathBuf> {
    Surface::ALL
        .iter()
        .map(|s| (s.entry_name().to_string(), PathBuf::from(s.default_source())))
        .collect()
}

/// `[build.rollupOptions.output]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default = "default_entry_file_names")]
    pub entry_file_names: String,

    #[serde(default = "default_chunk_file_names")]
    pub chunk_file_names: String,

    #[serde(default = "default_asset_file_names")]
    pub asset_file_names: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            entry_file_names: default_entry_file_names(),
            chunk_file_names: default_chunk_file_names(),
            asset_file_names: default_asset_file_names(),
        }
    }
}

fn default_entry_file_names() -> String {
    OutputCategory::Entry.default_pattern().to_string()
}

fn default_chunk_file_names() -> String {
    OutputCategory::Chunk.default_pattern().to_string()
}

fn default_asset_file_names() -> String {
    OutputCategory::Asset.default_pattern().to_string()
}

impl OutputOptions {
    /// Parse the three patterns into templates
    pub fn templates(&self) -> PlanResult<OutputTemplates> {
        OutputTemplates::parse(
            &self.entry_file_names,
            &self.chunk_file_names,
            &self.asset_file_names,
        )
    }

    /// Parse the three patterns, reporting every invalid one
    pub fn templates_all(&self) -> Result<OutputTemplates, Vec<ConfigurationError>> {
        OutputTemplates::parse_all(
            &self.entry_file_names,
            &self.chunk_file_names,
            &self.asset_file_names,
        )
    }
}

/// `[output]` section - how the CLI reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PlanResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PlanResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (EXTPLAN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Declared entries in name order
    pub fn entries(&self) -> PlanResult<Vec<EntryPoint>> {
        self.build
            .rollup_options
            .input
            .iter()
            .map(|(name, source)| EntryPoint::new(name.as_str(), source.as_path()))
            .collect()
    }

    /// Parsed output templates
    pub fn templates(&self) -> PlanResult<OutputTemplates> {
        self.build.rollup_options.output.templates()
    }
}
