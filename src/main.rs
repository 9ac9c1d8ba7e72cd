use std::process::ExitCode;

use clap::Parser;
use comment_directives::cli::{Arguments, ExitStatus};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();

    let level = if args.verbose() {
        Level::DEBUG
    } else {
        Level::WARN
    };
    // An explicit RUST_LOG wins over the verbosity flag.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match comment_directives::cli::run_cli(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
