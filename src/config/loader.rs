//! Configuration loading and discovery

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{ConfigurationError, PlanResult};

use super::types::{Config, Verbosity};

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "extplan.toml";

/// Overrides `build.outDir`
pub const ENV_OUT_DIR: &str = "EXTPLAN_OUT_DIR";
/// Overrides `output.verbosity`
pub const ENV_VERBOSITY: &str = "EXTPLAN_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A configuration together with where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// Directory relative paths in the config are resolved against
    pub config_dir: PathBuf,
    /// File the config was read from; `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

impl LoadedConfig {
    /// Built-in defaults anchored at `dir`
    pub fn defaults(dir: &Path) -> Self {
        Self {
            config: Config::default(),
            config_dir: dir.to_path_buf(),
            source: None,
            warnings: Vec::new(),
        }
    }

    /// Project root entry sources are resolved against
    pub fn root(&self) -> PathBuf {
        match &self.config.root {
            Some(root) => self.config_dir.join(root),
            None => self.config_dir.clone(),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PlanResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigurationError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigurationError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigurationError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Locate and load the configuration.
///
/// An explicit path must exist. Otherwise `extplan.toml` in `cwd` is used
/// when present, and the built-in defaults when not.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> PlanResult<LoadedConfig> {
    let path = match explicit {
        Some(path) => cwd.join(path),
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!(dir = %cwd.display(), "no config file, using defaults");
                let mut loaded = LoadedConfig::defaults(cwd);
                loaded.config = with_env_overrides(loaded.config);
                return Ok(loaded);
            }
            candidate
        }
    };

    let (config, warnings) = load_with_warnings(&path)?;
    let config_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf());

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        config_dir,
        source: Some(path),
        warnings,
    })
}

/// Apply environment variable overrides (EXTPLAN_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(out_dir) = lookup(ENV_OUT_DIR) {
        if !out_dir.trim().is_empty() {
            config.build.out_dir = PathBuf::from(out_dir.trim());
        }
    }

    if let Some(verbosity) = lookup(ENV_VERBOSITY) {
        match Verbosity::parse(&verbosity) {
            Some(v) => config.output.verbosity = v,
            None => tracing::warn!(value = %verbosity, "ignoring unrecognized {}", ENV_VERBOSITY),
        }
    }

    config
}

/// Contents written by `extplan init`
pub fn default_config_toml() -> String {
    r#"# extplan configuration
#
# Mirrors Vite's build.rollupOptions for a three-surface browser extension.

[build]
outDir = "dist"

[build.rollupOptions.input]
popup = "src/popup/index.html"
background = "src/background/index.ts"
content = "src/content/index.ts"

[build.rollupOptions.output]
entryFileNames = "src/[name]/index.js"
chunkFileNames = "assets/[name].js"
assetFileNames = "assets/[name].[ext]"
"#
    .to_string()
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "root",
        "build",
        "outDir",
        "rollupOptions",
        "input",
        "output",
        "entryFileNames",
        "chunkFileNames",
        "assetFileNames",
        "verbosity",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
