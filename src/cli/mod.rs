//! Command-line interface layer.
//!
//! Thin wrapper over [`crate::core`]: reads directive text, dispatches to a
//! parser, and prints the result as JSON or a cargo-style diagnostic.

use std::process::ExitCode;

use anyhow::Result;

mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run::run(args)?;
    tracing::debug!(kind = ?result.kind, status = ?result.exit_status(), "command finished");
    report::print(&result, verbose)?;

    Ok(result.exit_status().into())
}
