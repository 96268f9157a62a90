//! Error types for the API

use thiserror::Error;

/// Why a summarize call produced no summary.
///
/// The `Display` text is what callers see in [`SummaryResult::error`].
///
/// [`SummaryResult::error`]: crate::api::SummaryResult::error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// Empty input
    #[error("Invalid input text")]
    InvalidInput,

    /// Segmentation kept fewer sentences than required
    #[error("Text too short - need at least {required} complete sentences")]
    TooFewSentences {
        /// Sentences the segmenter kept
        found: usize,
        /// Sentences required
        required: usize,
    },

    /// The text had no content tokens to score
    #[error("Unable to analyze sentence importance")]
    NoScorableContent,

    /// Selection picked nothing
    #[error("Could not generate meaningful summary")]
    EmptySelection,

    /// Anything else that went wrong while processing
    #[error("Processing error: {0}")]
    Processing(String),
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value is out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The configuration file could not be read
    #[error("Failed to read configuration {path}: {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The TOML document is malformed or has unknown fields
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
