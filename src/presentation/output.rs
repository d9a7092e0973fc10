//! Output Rendering
//!
//! Text views return strings so commands decide where they go. JSON
//! output is one document per command on stdout.

use std::path::Path;

use crossterm::style::Stylize;
use serde_json::{json, Value};

use crate::config::ConfigWarning;
use crate::domain::services::BundlePlan;
use crate::domain::value_objects::{OutputCategory, ResolvedOutputPath};
use crate::error::ConfigurationError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => "✓",
            (true, Icon::Error) => "✗",
            (true, Icon::Warning) => "⚠",
            (true, Icon::Arrow) => "→",
            (false, Icon::Success) => "[OK]",
            (false, Icon::Error) => "[FAIL]",
            (false, Icon::Warning) => "[WARN]",
            (false, Icon::Arrow) => "->",
        }
    }

    pub fn colored(&self, style: Style) -> String {
        let s = self.render(style.unicode);
        if !style.color {
            return s.to_string();
        }
        match self {
            Icon::Success => s.green().to_string(),
            Icon::Error => s.red().to_string(),
            Icon::Warning => s.yellow().to_string(),
            Icon::Arrow => s.dark_grey().to_string(),
        }
    }
}

/// Presentation switches for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: false,
        unicode: false,
    };
}

/// Text view of a bundle plan
pub fn render_plan(plan: &BundlePlan, style: Style) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Bundle plan\n", Icon::Success.colored(style)));
    out.push_str(&format!("  Output: {}\n", plan.out_dir().display()));

    for (category, title) in [
        (OutputCategory::Entry, "Entries"),
        (OutputCategory::Chunk, "Chunks"),
        (OutputCategory::Asset, "Assets"),
    ] {
        let count = plan.count(category);
        if count == 0 {
            continue;
        }
        out.push_str(&format!("\n  {} ({}):\n", title, count));
        for item in plan.all().filter(|r| r.category() == category) {
            if category == OutputCategory::Entry {
                out.push_str(&format!(
                    "    {} {}  ({})\n",
                    Icon::Arrow.colored(style),
                    item.as_str(),
                    item.name()
                ));
            } else {
                out.push_str(&format!("    {} {}\n", Icon::Arrow.colored(style), item.as_str()));
            }
        }
    }

    let missing = plan.missing_surfaces();
    if !missing.is_empty() {
        out.push('\n');
        for surface in missing {
            out.push_str(&format!(
                "  {} no '{}' entry declared\n",
                Icon::Warning.colored(style),
                surface
            ));
        }
    }
    out
}

/// JSON document for a bundle plan
pub fn plan_json(plan: &BundlePlan) -> Value {
    json!({
        "event": "plan",
        "success": true,
        "out_dir": plan.out_dir().display().to_string(),
        "entries": plan.entries(),
        "chunks": plan.chunks(),
        "assets": plan.assets(),
        "templates": {
            "chunk": plan.chunk_template().pattern(),
            "asset": plan.asset_template().pattern(),
        },
        "missing_surfaces": plan.missing_surfaces(),
    })
}

/// JSON document for a single resolution
pub fn resolved_json(resolved: &ResolvedOutputPath, out_dir: &Path) -> Value {
    json!({
        "event": "resolve",
        "category": resolved.category(),
        "name": resolved.name(),
        "path": resolved.as_str(),
        "file": resolved.under(out_dir).display().to_string(),
    })
}

/// Text view of a check run
pub fn render_check(
    errors: &[ConfigurationError],
    warnings: &[ConfigWarning],
    entry_count: usize,
    style: Style,
) -> String {
    let mut out = String::new();
    if errors.is_empty() {
        out.push_str(&format!(
            "{} Configuration OK ({} entries)\n",
            Icon::Success.colored(style),
            entry_count
        ));
    } else {
        out.push_str(&format!(
            "{} Configuration invalid ({} problems)\n",
            Icon::Error.colored(style),
            errors.len()
        ));
        for error in errors {
            out.push_str(&format!("  {} {}\n", Icon::Error.colored(style), error));
        }
    }
    for warning in warnings {
        out.push_str(&format!("  {} {}\n", Icon::Warning.colored(style), warning));
    }
    out
}

/// JSON document for a check run
pub fn check_json(errors: &[ConfigurationError], warnings: &[ConfigWarning]) -> Value {
    json!({
        "event": "check",
        "success": errors.is_empty(),
        "errors": errors.iter().map(|e| e.to_string()).collect::<Vec<_>>(),
        "warnings": warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
    })
}

/// JSON document for a failed command
pub fn error_json(command: &str, error: &anyhow::Error) -> Value {
    let kind = if error.downcast_ref::<ConfigurationError>().is_some() {
        "configuration"
    } else {
        "internal"
    };
    json!({
        "event": "error",
        "command": command,
        "kind": kind,
        "message": format!("{:#}", error),
    })
}
