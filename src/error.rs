//! Error types for extplan
//!
//! Every failure the planner can report is a configuration problem: the
//! build cannot produce a valid extension, so nothing is partially planned.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{OutputCategory, Surface};

/// Result type alias for planning operations
pub type PlanResult<T> = Result<T, ConfigurationError>;

/// Unrecoverable configuration error
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Declared entry source does not exist
    #[error("entry '{entry}' is unresolvable: source {path} does not exist")]
    MissingEntrySource { entry: String, path: PathBuf },

    /// Declared entry source exists but cannot be bundled
    #[error("entry '{entry}' is unresolvable: source {path} is not a readable file")]
    UnreadableEntrySource { entry: String, path: PathBuf },

    /// Entry name was never declared
    #[error("unknown entry '{entry}'")]
    UnknownEntry { entry: String },

    /// Same entry name declared twice
    #[error("entry '{entry}' is declared more than once")]
    DuplicateEntry { entry: String },

    /// Entry name cannot be substituted into a path
    #[error("invalid entry name '{entry}': {reason}")]
    InvalidEntryName { entry: String, reason: String },

    /// Chunk or asset name cannot be substituted into a path
    #[error("invalid {category} name '{name}': {reason}")]
    InvalidOutputName {
        category: OutputCategory,
        name: String,
        reason: String,
    },

    /// Template uses a placeholder other than [name] or [ext]
    #[error("{category} template '{template}' uses unrecognized placeholder '[{placeholder}]'")]
    UnknownPlaceholder {
        category: OutputCategory,
        template: String,
        placeholder: String,
    },

    /// Template has a '[' without a matching ']'
    #[error("{category} template '{template}' has an unterminated placeholder")]
    UnterminatedPlaceholder {
        category: OutputCategory,
        template: String,
    },

    /// Template is empty
    #[error("{category} template is empty")]
    EmptyTemplate { category: OutputCategory },

    /// Template would place files outside the output directory
    #[error("{category} template '{template}' is not a relative output path: {reason}")]
    UnsafeTemplate {
        category: OutputCategory,
        template: String,
        reason: String,
    },

    /// Two entries resolve to the same output file
    #[error("entries '{first}' and '{second}' both resolve to '{path}'")]
    OutputCollision {
        path: String,
        first: String,
        second: String,
    },

    /// Required extension surface is not declared
    #[error("extension surface '{surface}' has no entry")]
    MissingSurface { surface: Surface },

    /// Surface source has the wrong kind of file
    #[error("extension surface '{surface}' expects {expected}, got {path}")]
    SurfaceKindMismatch {
        surface: Surface,
        path: PathBuf,
        expected: &'static str,
    },

    /// Config file does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file is not valid TOML or has wrong value types
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_missing_entry_source() {
        let err = ConfigurationError::MissingEntrySource {
            entry: "content".to_string(),
            path: PathBuf::from("src/content/index.ts"),
        };
        assert_eq!(
            err.to_string(),
            "entry 'content' is unresolvable: source src/content/index.ts does not exist"
        );
    }

    #[test]
    fn test_error_display_unknown_placeholder() {
        let err = ConfigurationError::UnknownPlaceholder {
            category: OutputCategory::Chunk,
            template: "assets/[name]-[hash].js".to_string(),
            placeholder: "hash".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "chunk template 'assets/[name]-[hash].js' uses unrecognized placeholder '[hash]'"
        );
    }

    #[test]
    fn test_error_display_collision_names_both_entries() {
        let err = ConfigurationError::OutputCollision {
            path: "bundle.js".to_string(),
            first: "background".to_string(),
            second: "content".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("background"));
        assert!(msg.contains("content"));
        assert!(msg.contains("bundle.js"));
    }
}
