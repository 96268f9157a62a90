//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration file could not be loaded
    ConfigError(String),
    /// Input text rejected by the pre-flight validator
    ValidationFailed(String),
    /// The summarizer returned an unsuccessful result
    SummarizationFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
            CliError::SummarizationFailed(msg) => write!(f, "Summarization failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
