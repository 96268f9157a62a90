//! Public summarization API
//!
//! This module wires the pipeline stages from [`crate::domain`] into a single
//! [`Summarizer`] entry point and defines the flat result types handed to
//! adapters such as the CLI.

mod config;
mod error;
mod output;
mod summarizer;


pub use config::{
    defaults, ConfigBuilder, LengthTier, ScoringConfig, SegmentationConfig, SelectionConfig,
    SummarizerConfig, ValidationConfig, VocabularyConfig,
};
pub use error::{ConfigError, SummarizeError};
pub use output::{compression_ratio, Summary, SummaryResult, SummarySentence, SummaryStats};
pub use summarizer::{summarize, validate, Summarizer};
