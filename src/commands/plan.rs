use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;

use extplan::application::PlanRequest;
use extplan::config::LoadedConfig;
use extplan::infrastructure::discover_assets;
use extplan::presentation::factory::create_plan_use_case;
use extplan::presentation::output::{plan_json, render_plan};
use extplan::presentation::OutputFormat;

use super::{emit_json, CommandContext};

pub fn cmd_plan(
    loaded: &LoadedConfig,
    chunks: Vec<String>,
    assets: Vec<String>,
    assets_dir: Option<&Path>,
    ctx: &CommandContext,
) -> Result<ExitCode> {
    let asset_files = match assets_dir {
        Some(dir) => discover_assets(dir)?,
        None => Vec::new(),
    };
    let request = PlanRequest {
        chunks,
        assets,
        asset_files,
    };

    let plan = create_plan_use_case().execute(loaded, &request)?;

    match ctx.format {
        OutputFormat::Json => emit_json(&plan_json(&plan))?,
        OutputFormat::Text => print!("{}", render_plan(&plan, ctx.style)),
    }
    Ok(ExitCode::SUCCESS)
}
