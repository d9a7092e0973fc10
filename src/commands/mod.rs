//! Command handlers for the `extplan` binary

pub mod check;
pub mod init;
pub mod plan;
pub mod resolve;

use std::io::{self, Write};

use extplan::presentation::{OutputFormat, Style};

/// Per-invocation output settings shared by all commands
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub style: Style,
}

/// Write one JSON document as a single line on stdout
pub fn emit_json(value: &serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer(&mut out, value)?;
    out.write_all(b"\n")?;
    out.flush()
}
