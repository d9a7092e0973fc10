//! CLI Argument Parsing
//!
//! Global flags (--config, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::OutputCategory;

/// extplan - output layout planner for browser extension bundles
#[derive(Parser, Debug)]
#[command(name = "extplan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ./extplan.toml, else built-in layout)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every entry and print the output layout
    Plan {
        /// Shared code fragment to place with chunkFileNames (repeatable)
        #[arg(long = "chunk", value_name = "NAME")]
        chunks: Vec<String>,

        /// Asset file to place with assetFileNames (repeatable)
        #[arg(long = "asset", value_name = "FILE")]
        assets: Vec<String>,

        /// Directory whose files are placed with assetFileNames
        #[arg(long, value_name = "DIR")]
        assets_dir: Option<PathBuf>,
    },

    /// Resolve a single name under one output template
    Resolve {
        /// Template to apply
        #[arg(value_enum)]
        category: OutputCategory,

        /// Entry name, chunk name, or asset file name
        name: String,
    },

    /// Validate the configuration and report every problem
    Check {
        /// Also require popup, background and content entries of the right kind
        #[arg(long)]
        strict: bool,
    },

    /// Write a default extplan.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Plan { .. } => "plan",
            Commands::Resolve { .. } => "resolve",
            Commands::Check { .. } => "check",
            Commands::Init { .. } => "init",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn plan_accepts_repeated_chunks_and_assets() {
        let cli = Cli::try_parse_from([
            "extplan", "plan", "--chunk", "vendor", "--chunk", "shared", "--asset", "logo.png",
        ])
        .unwrap();
        match cli.command {
            Commands::Plan { chunks, assets, assets_dir } => {
                assert_eq!(chunks, ["vendor", "shared"]);
                assert_eq!(assets, ["logo.png"]);
                assert!(assets_dir.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn resolve_parses_category() {
        let cli = Cli::try_parse_from(["extplan", "--json", "resolve", "asset", "g.png"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Resolve { category, name } => {
                assert_eq!(category, OutputCategory::Asset);
                assert_eq!(name, "g.png");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["extplan", "check", "--strict", "-vv", "--config", "x.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        assert_eq!(cli.command.name(), "check");
    }
}
