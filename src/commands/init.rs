//! Init command - write a default extplan.toml

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use serde_json::json;

use extplan::config::{default_config_toml, CONFIG_FILE_NAME};
use extplan::domain::ports::FileSystem;
use extplan::infrastructure::LocalFs;
use extplan::presentation::output::Icon;
use extplan::presentation::OutputFormat;

use super::{emit_json, CommandContext};

pub fn cmd_init(dir: &Path, force: bool, ctx: &CommandContext) -> Result<ExitCode> {
    let fs = LocalFs::new();
    let path = dir.join(CONFIG_FILE_NAME);

    if fs.exists(&path) && !force {
        bail!(
            "{} already exists at {}. Use --force to overwrite.",
            CONFIG_FILE_NAME,
            path.display()
        );
    }

    fs.write(&path, &default_config_toml())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote default config");

    match ctx.format {
        OutputFormat::Json => emit_json(&json!({
            "event": "init",
            "success": true,
            "path": path.display().to_string(),
        }))?,
        OutputFormat::Text => println!(
            "{} Created {}",
            Icon::Success.colored(ctx.style),
            path.display()
        ),
    }
    Ok(ExitCode::SUCCESS)
}
