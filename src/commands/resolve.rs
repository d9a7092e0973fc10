use std::process::ExitCode;

use anyhow::Result;

use extplan::config::LoadedConfig;
use extplan::presentation::factory::create_plan_use_case;
use extplan::presentation::output::resolved_json;
use extplan::presentation::OutputFormat;
use extplan::OutputCategory;

use super::{emit_json, CommandContext};

/// Print the output path for one name. Text output is the bare path so
/// scripts can capture it.
pub fn cmd_resolve(
    loaded: &LoadedConfig,
    category: OutputCategory,
    name: &str,
    ctx: &CommandContext,
) -> Result<ExitCode> {
    let use_case = create_plan_use_case();
    let planner = use_case.planner(loaded)?;

    let resolved = match category {
        OutputCategory::Entry => planner.resolve_entry(name)?,
        OutputCategory::Chunk => planner.resolve_chunk(name)?,
        OutputCategory::Asset => planner.resolve_asset(name)?,
    };
    let out_dir = planner.root().join(planner.out_dir());

    match ctx.format {
        OutputFormat::Json => emit_json(&resolved_json(&resolved, &out_dir))?,
        OutputFormat::Text => println!("{}", resolved),
    }
    Ok(ExitCode::SUCCESS)
}
