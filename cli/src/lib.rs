//! Library side of the `pitch` binary: argument groups, output rendering and the
//! interactive command set. `main.rs` only wires these to clap and stdin.

pub mod args;
pub mod command;
pub mod render;

use std::path::PathBuf;

use thiserror::Error;

pub use args::{GatewayArgs, InputArgs, ModeArgs};
pub use command::{execute, DraftRef, ReplCommand, HELP};

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line or REPL input; printed as-is.
    #[error("{0}")]
    Usage(String),
    #[error("read {path}: {reason}")]
    InputFile { path: PathBuf, reason: String },
    #[error(transparent)]
    Session(#[from] pitch::SessionError),
}

/// Serialises `value` compact or pretty, as `--json` / `--pretty` ask.
pub fn to_json_string(value: &serde_json::Value, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
