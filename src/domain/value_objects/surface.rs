//! Surface value object - the three execution contexts of a browser extension

use std::path::Path;

use serde::{Deserialize, Serialize};

const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "js", "jsx", "mjs"];
const DOCUMENT_EXTENSIONS: &[&str] = &["html", "htm"];

/// Extension surface that must ship as its own bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Toolbar popup page
    Popup,
    /// Background service worker
    Background,
    /// Script injected into visited pages
    Content,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Popup, Surface::Background, Surface::Content];

    /// Entry name this surface is registered under
    pub fn entry_name(&self) -> &'static str {
        match self {
            Surface::Popup => "popup",
            Surface::Background => "background",
            Surface::Content => "content",
        }
    }

    pub fn from_entry_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.entry_name() == name)
    }

    /// Conventional source path relative to the project root
    pub fn default_source(&self) -> &'static str {
        match self {
            Surface::Popup => "src/popup/index.html",
            Surface::Background => "src/background/index.ts",
            Surface::Content => "src/content/index.ts",
        }
    }

    /// Human description of the accepted source kind
    pub fn expected_kind(&self) -> &'static str {
        match self {
            Surface::Popup => "an HTML document",
            Surface::Background | Surface::Content => "a script",
        }
    }

    /// Check the source file's extension against the surface kind
    pub fn accepts_source(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        let allowed = match self {
            Surface::Popup => DOCUMENT_EXTENSIONS,
            Surface::Background | Surface::Content => SCRIPT_EXTENSIONS,
        };
        allowed.contains(&ext.as_str())
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entry_name())
    }
}
