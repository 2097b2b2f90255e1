use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failures of the console session itself. Command-level validation errors
/// live in [`crate::core::services::ServiceError`] and never reach this type.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
}
