//! Command-line interface

pub mod commands;
pub mod output;
pub mod types;

use std::process::ExitCode;

pub use types::{Cli, Commands};

/// Print an error and its cause chain
///
/// Returns the failure exit code for `main` to return, so destructors (the
/// log file writer's flush guard in particular) still run.
pub fn report_error(err: &anyhow::Error, json: bool) -> ExitCode {
    if json {
        let causes: Vec<String> = err.chain().skip(1).map(ToString::to_string).collect();
        let payload = serde_json::json!({ "error": err.to_string(), "causes": causes });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err}");
        for cause in err.chain().skip(1) {
            eprintln!("  caused by: {cause}");
        }
    }
    ExitCode::FAILURE
}
