use std::process::ExitCode;

use anyhow::Result;

use extplan::application::{CheckOptions, CheckReport};
use extplan::config::LoadedConfig;
use extplan::presentation::factory::create_check_use_case;
use extplan::presentation::output::{check_json, render_check};
use extplan::presentation::OutputFormat;
use extplan::PlanResult;

use super::{emit_json, CommandContext};

/// Exit code 1 when any problem is found. A config that fails to load is
/// reported like any other problem.
pub fn cmd_check(
    loaded: PlanResult<LoadedConfig>,
    strict: bool,
    ctx: &CommandContext,
) -> Result<ExitCode> {
    let report = match loaded {
        Ok(loaded) => create_check_use_case().execute(&loaded, CheckOptions { strict }),
        Err(e) => CheckReport::load_failure(e),
    };

    match ctx.format {
        OutputFormat::Json => emit_json(&check_json(&report.errors, &report.warnings))?,
        OutputFormat::Text => print!(
            "{}",
            render_check(&report.errors, &report.warnings, report.entry_count, ctx.style)
        ),
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
