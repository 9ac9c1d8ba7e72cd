//! Command dispatch.
//!
//! Reads the directive text (argument or stdin), loads configuration when
//! the command needs it, and runs the matching parser.

use std::{
    env,
    io::{self, Read},
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, CommonArgs},
    commands::{CommandResult, directive::directive, init::init, parse::parse},
};
use crate::config::{ValueKind, load_config};

/// Run the selected command.
///
/// # Returns
/// - `Ok(CommandResult)` with the parsed value or diagnostic
/// - `Err` if input cannot be read or the config file is invalid
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Json(args)) => run_parse(ValueKind::Structured, &args),
        Some(Command::List(args)) => run_parse(ValueKind::List, &args),
        Some(Command::Flags(args)) => run_parse(ValueKind::Flags, &args),
        Some(Command::Directive(args)) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            let loaded = load_config(&cwd)?;
            if !loaded.from_file {
                tracing::debug!("no config file found, using default labels");
            }
            let text = read_text(&args)?;
            directive(&loaded.config, &text, &args.location())
        }
        Some(Command::Init) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            init(&cwd)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn run_parse(kind: ValueKind, args: &CommonArgs) -> Result<CommandResult> {
    let text = read_text(args)?;
    parse(kind, &text, &args.location())
}

/// The text argument, or stdin when it is missing or `-`.
fn read_text(args: &CommonArgs) -> Result<String> {
    match args.text.as_deref() {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read directive text from stdin")?;
            Ok(text)
        }
    }
}
