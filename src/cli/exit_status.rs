use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Text parsed (or config written)
/// - `Failure` (1): Text could not be parsed, or is not a recognized directive
/// - `Error` (2): Internal error (unreadable input, invalid config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Text parsed successfully.
    Success,
    /// Text was read but produced a parse diagnostic.
    Failure,
    /// Command failed due to internal error (I/O, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
