//! Output formatting module

use anyhow::{Context, Result};
use precis_core::{SummaryResult, SummaryStats};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single summary report
    fn format_report(&mut self, report: &SummaryReport) -> Result<()>;

    /// Finalize output (e.g., emit collected JSON)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary followed by key points and statistics
    Text,
    /// JSON object with the result and statistics
    Json,
    /// Markdown section with a statistics footer
    Markdown,
}

/// A summary result together with everything printed alongside it
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Heading shown above the summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The summarizer's result
    pub result: SummaryResult,
    /// Statistics recomputed against the source text
    pub stats: SummaryStats,
    /// Bullet-point rendering at the fixed key-points target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_points: Option<SummaryResult>,
}

impl SummaryReport {
    /// Build a report for `result`, computing statistics against `original`
    pub fn new(original: &str, result: SummaryResult) -> Self {
        let stats = SummaryStats::compute(original, &result);
        Self {
            title: None,
            result,
            stats,
            key_points: None,
        }
    }

    /// Set the heading
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a key-points rendering
    pub fn with_key_points(mut self, key_points: SummaryResult) -> Self {
        self.key_points = Some(key_points);
        self
    }
}

/// Open the output destination: a file when given, stdout otherwise
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
