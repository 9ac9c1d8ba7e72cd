//! Report formatting and printing utilities.
//!
//! Parsed values go to stdout as pretty JSON. Diagnostics are printed
//! cargo-style to stderr, and their JSON form to stdout so scripts can
//! consume either stream.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::Diagnostic;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a command result to stdout/stderr.
pub fn print(result: &CommandResult, verbose: bool) -> Result<()> {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(
    result: &CommandResult,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) -> Result<()> {
    match &result.summary {
        CommandSummary::Parsed(value) => print_json(value, out)?,
        CommandSummary::Failed(diagnostic) => {
            print_diagnostic(diagnostic, &result.text, verbose, err);
            print_json(diagnostic, out)?;
        }
        CommandSummary::Unrecognized => {
            let _ = writeln!(
                err,
                "{} text is not a recognized directive (see {})",
                "warning:".bold().yellow(),
                CONFIG_FILE_NAME.cyan()
            );
        }
        CommandSummary::Init(InitSummary { created: true }) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
        CommandSummary::Init(InitSummary { created: false }) => {
            let _ = writeln!(
                err,
                "{} {} already exists",
                "error:".bold().red(),
                CONFIG_FILE_NAME
            );
        }
    }
    Ok(())
}

fn print_json<T: Serialize, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    let _ = writeln!(writer, "{}", json);
    Ok(())
}

/// Print a diagnostic with the offending text underlined.
///
/// Without `verbose`, only the first line of the message is shown; JSON5
/// parser errors span several lines.
fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, text: &str, verbose: bool, writer: &mut W) {
    let message = if verbose {
        diagnostic.message.as_str()
    } else {
        diagnostic.message.lines().next().unwrap_or_default()
    };

    let _ = writeln!(writer, "{}: {}", "error".bold().red(), message);
    let _ = writeln!(
        writer,
        "  {} {}:{}",
        "-->".blue(),
        diagnostic.line,
        diagnostic.column
    );

    let line_width = diagnostic.line.to_string().len();
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = line_width);

    for (offset, source_line) in text.lines().enumerate() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            diagnostic.line.saturating_add(offset).to_string().blue(),
            "|".blue(),
            source_line,
            width = line_width
        );
        let underline = "^".repeat(UnicodeWidthStr::width(source_line).max(1));
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            "",
            "|".blue(),
            underline.red(),
            width = line_width
        );
    }
}
