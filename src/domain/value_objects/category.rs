//! Output category value object - which naming template applies to a file

use serde::{Deserialize, Serialize};

/// Kind of file the bundler emits
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputCategory {
    /// Top-level bundle for a declared entry point
    Entry,
    /// Code-split fragment shared between entries
    Chunk,
    /// Non-script file pulled in transitively (images, styles)
    Asset,
}

impl OutputCategory {
    pub const ALL: [OutputCategory; 3] = [
        OutputCategory::Entry,
        OutputCategory::Chunk,
        OutputCategory::Asset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputCategory::Entry => "entry",
            OutputCategory::Chunk => "chunk",
            OutputCategory::Asset => "asset",
        }
    }

    /// Built-in naming pattern
    pub fn default_pattern(&self) -> &'static str {
        match self {
            OutputCategory::Entry => "src/[name]/index.js",
            OutputCategory::Chunk => "assets/[name].js",
            OutputCategory::Asset => "assets/[name].[ext]",
        }
    }

    /// Whether `[ext]` is the emitted script extension rather than the
    /// source file's own extension
    pub fn is_script(&self) -> bool {
        !matches!(self, OutputCategory::Asset)
    }
}

impl std::fmt::Display for OutputCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
