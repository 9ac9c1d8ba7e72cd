//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `json`: Parse a JSON-like directive body into an object
//! - `list`: Parse `name` / `name:value` tokens into a directive map
//! - `flags`: Parse a comma-separated list of names into a flag set
//! - `directive`: Split a full directive comment and parse its value by label
//! - `init`: Write a default configuration file

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Location;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Json(args))
            | Some(Command::List(args))
            | Some(Command::Flags(args))
            | Some(Command::Directive(args)) => args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all parse commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directive text (read from stdin when omitted or `-`)
    pub text: Option<String>,

    /// Line of the comment the text was taken from
    #[arg(long, default_value_t = 1)]
    pub line: usize,

    /// Zero-based column of the comment the text was taken from
    #[arg(long, default_value_t = 0)]
    pub column: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a JSON-like directive body (e.g. `semi: 2, quotes: [2, "double"]`)
    Json(CommonArgs),
    /// Parse `name` / `name:value` tokens (e.g. `foo:writable bar`)
    List(CommonArgs),
    /// Parse a comma-separated list of names (e.g. `browser, node`)
    Flags(CommonArgs),
    /// Split a directive comment into label, value and justification
    Directive(CommonArgs),
    /// Initialize configuration file
    Init,
}
