//! Error handling for the CLI application

use std::fmt;

/// CLI-specific errors
///
/// Failures from the emitter itself arrive as `prefixgram_core::CoreError`
/// wrapped in `anyhow::Error`.
#[derive(Debug)]
pub enum CliError {
    /// Configuration file unreadable or malformed
    ConfigError(String),
    /// Output file could not be created
    OutputUnavailable(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputUnavailable(path) => write!(f, "Cannot create output file: {path}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
