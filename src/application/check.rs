//! Check Use Case
//!
//! Collects every configuration problem instead of stopping at the first,
//! so one `extplan check` run shows everything that needs fixing.

use crate::config::{ConfigWarning, LoadedConfig};
use crate::domain::entities::EntryPoint;
use crate::domain::policies::check_surfaces;
use crate::domain::ports::FileSystem;
use crate::domain::services::BundlePlanner;
use crate::error::ConfigurationError;

/// Options for the check operation
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Require the three extension surfaces with the right source kinds
    pub strict: bool,
}

/// Result of the check operation
#[derive(Debug, Default)]
pub struct CheckReport {
    pub errors: Vec<ConfigurationError>,
    pub warnings: Vec<ConfigWarning>,
    pub entry_count: usize,
}

impl CheckReport {
    /// A report for a config that could not even be loaded
    pub fn load_failure(error: ConfigurationError) -> Self {
        Self {
            errors: vec![error],
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check Use Case
pub struct CheckUseCase<F> {
    fs: F,
}

impl<F: FileSystem> CheckUseCase<F> {
    pub fn new(fs: F) -> Self {
        Self { fs }
    }

    pub fn execute(&self, loaded: &LoadedConfig, options: CheckOptions) -> CheckReport {
        let mut errors = Vec::new();

        let mut entries = Vec::new();
        for (name, source) in &loaded.config.build.rollup_options.input {
            match EntryPoint::new(name.as_str(), source.as_path()) {
                Ok(entry) => entries.push(entry),
                Err(e) => errors.push(e),
            }
        }

        let templates = match loaded.config.build.rollup_options.output.templates_all() {
            Ok(templates) => Some(templates),
            Err(template_errors) => {
                errors.extend(template_errors);
                None
            }
        };
        let collisions_checkable = templates.is_some();

        let planner = BundlePlanner::new(loaded.root(), templates.unwrap_or_default(), &self.fs)
            .with_out_dir(&loaded.config.build.out_dir)
            .with_entries(entries.iter().cloned());
        match planner {
            Ok(planner) => {
                errors.extend(planner.check_sources());
                if collisions_checkable {
                    errors.extend(planner.check_collisions());
                }
            }
            Err(e) => errors.push(e),
        }

        if options.strict {
            errors.extend(check_surfaces(&entries));
        }

        tracing::info!(
            entries = entries.len(),
            problems = errors.len(),
            strict = options.strict,
            "configuration checked"
        );

        CheckReport {
            errors,
            warnings: loaded.warnings.clone(),
            entry_count: entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryFs;
    use std::path::{Path, PathBuf};

    fn all_sources() -> MemoryFs {
        MemoryFs::with_files([
            "/p/src/popup/index.html",
            "/p/src/background/index.ts",
            "/p/src/content/index.ts",
        ])
    }

    #[test]
    fn default_layout_with_sources_passes_strict() {
        let loaded = LoadedConfig::defaults(Path::new("/p"));
        let report = CheckUseCase::new(all_sources()).execute(&loaded, CheckOptions { strict: true });
        assert!(report.is_success(), "{:?}", report.errors);
        assert_eq!(report.entry_count, 3);
    }

    #[test]
    fn reports_template_and_source_problems_together() {
        let mut loaded = LoadedConfig::defaults(Path::new("/p"));
        loaded.config.build.rollup_options.output.chunk_file_names = "assets/[hash].js".to_string();

        let report = CheckUseCase::new(MemoryFs::new()).execute(&loaded, CheckOptions::default());

        let placeholders = report
            .errors
            .iter()
            .filter(|e| matches!(e, ConfigurationError::UnknownPlaceholder { .. }))
            .count();
        let missing = report
            .errors
            .iter()
            .filter(|e| matches!(e, ConfigurationError::MissingEntrySource { .. }))
            .count();
        assert_eq!(placeholders, 1);
        assert_eq!(missing, 3);
    }

    #[test]
    fn strict_requires_every_surface() {
        let mut loaded = LoadedConfig::defaults(Path::new("/p"));
        loaded.config.build.rollup_options.input.remove("content");

        let lenient = CheckUseCase::new(all_sources()).execute(&loaded, CheckOptions::default());
        assert!(lenient.is_success());

        let strict = CheckUseCase::new(all_sources()).execute(&loaded, CheckOptions { strict: true });
        assert_eq!(strict.errors.len(), 1);
        assert!(matches!(strict.errors[0], ConfigurationError::MissingSurface { .. }));
    }

    #[test]
    fn invalid_entry_names_are_reported() {
        let mut loaded = LoadedConfig::defaults(Path::new("/p"));
        loaded
            .config
            .build
            .rollup_options
            .input
            .insert("pages/options".to_string(), PathBuf::from("src/options.html"));

        let report = CheckUseCase::new(all_sources()).execute(&loaded, CheckOptions::default());

        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0], ConfigurationError::InvalidEntryName { .. }));
    }
}
