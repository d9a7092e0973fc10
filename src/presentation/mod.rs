//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;
pub mod terminal;

pub use cli::{Cli, Commands};
pub use factory::{create_check_use_case, create_plan_use_case};
pub use output::{OutputFormat, Style};
