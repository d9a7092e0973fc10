//! extplan CLI - output layout planner for browser extension bundles
//!
//! Usage: extplan <COMMAND>
//!
//! Commands:
//!   plan     Resolve every entry and print the output layout
//!   resolve  Resolve a single name under one output template
//!   check    Validate the configuration and report every problem
//!   init     Write a default extplan.toml

mod commands;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use commands::CommandContext;
use extplan::config::{self, LoadedConfig, Verbosity};
use extplan::presentation::output::error_json;
use extplan::presentation::terminal::{detect_capabilities, TerminalCapabilities};
use extplan::presentation::{Cli, Commands, OutputFormat, Style};
use extplan::{telemetry, PlanResult};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            let emitted = json && commands::emit_json(&error_json(command, &err)).is_ok();
            if !emitted {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let caps = detect_capabilities();
    let format = OutputFormat::from_json_flag(cli.json);
    let load = || load_config(cli.config.as_deref(), &cwd, cli.verbose, cli.json);

    match cli.command {
        Commands::Init { force } => {
            // Init writes the config, so it never reads one.
            init_logging(Verbosity::default(), cli.verbose, cli.json);
            let ctx = CommandContext {
                format,
                style: Style {
                    color: caps.supports_color,
                    unicode: caps.supports_unicode,
                },
            };
            commands::init::cmd_init(&cwd, force, &ctx)
        }
        Commands::Check { strict } => {
            let loaded = load();
            let ctx = context(format, caps, loaded.as_ref().ok());
            commands::check::cmd_check(loaded, strict, &ctx)
        }
        Commands::Plan {
            chunks,
            assets,
            assets_dir,
        } => {
            let loaded = load()?;
            let ctx = context(format, caps, Some(&loaded));
            let assets_dir = assets_dir.map(|dir| cwd.join(dir));
            commands::plan::cmd_plan(&loaded, chunks, assets, assets_dir.as_deref(), &ctx)
        }
        Commands::Resolve { category, name } => {
            let loaded = load()?;
            let ctx = context(format, caps, Some(&loaded));
            commands::resolve::cmd_resolve(&loaded, category, &name, &ctx)
        }
    }
}

/// Discover the config, then install logging at its verbosity
fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    verbose: u8,
    json: bool,
) -> PlanResult<LoadedConfig> {
    let loaded = config::discover(explicit, cwd);
    let verbosity = loaded
        .as_ref()
        .map(|l| l.config.output.verbosity)
        .unwrap_or_default();
    init_logging(verbosity, verbose, json);

    if let Ok(loaded) = &loaded {
        match &loaded.source {
            Some(path) => tracing::debug!(config = %path.display(), "loaded config"),
            None => tracing::debug!("using built-in config"),
        }
        for warning in &loaded.warnings {
            tracing::warn!("{}", warning);
        }
    }
    loaded
}

fn context(
    format: OutputFormat,
    caps: TerminalCapabilities,
    loaded: Option<&LoadedConfig>,
) -> CommandContext {
    let unicode_enabled = loaded.map_or(true, |l| l.config.output.unicode);
    CommandContext {
        format,
        style: Style {
            color: caps.supports_color,
            unicode: caps.supports_unicode && unicode_enabled,
        },
    }
}

fn init_logging(verbosity: Verbosity, verbose: u8, json: bool) {
    let level = telemetry::level_for(verbosity, verbose);
    // A subscriber can only be installed once per process.
    let _ = telemetry::init_logging(level, json);
}
