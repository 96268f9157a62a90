//! Summarize command implementation

use crate::config::load_summarizer;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{create_formatter, open_output, OutputFormat, SummaryReport};
use anyhow::Result;
use clap::Args;
use precis_core::api::defaults;
use precis_core::LengthTier;
use std::path::PathBuf;

/// Target of the bullet-point rendering printed after a text summary
const KEY_POINTS_WORDS: usize = defaults::TARGET_WORDS;

/// Arguments for the summarize command
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Target summary length in words
    #[arg(short, long, value_name = "N", conflicts_with = "length")]
    pub words: Option<usize>,

    /// Target summary length as a preset: short, medium or long
    #[arg(short, long, value_name = "TIER")]
    pub length: Option<LengthTier>,

    /// Presentation style: paragraph, bullets or highlights
    #[arg(short, long, default_value = "paragraph")]
    pub style: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PRECIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SummarizeArgs {
    /// Execute the summarize command
    pub fn execute(&self) -> Result<()> {
        log::info!("Starting summarization");
        log::debug!("Arguments: {:?}", self);

        let summarizer = load_summarizer(self.config.as_deref())?;
        let text = FileReader::read_source(self.input.as_deref())?;

        let validation = summarizer.validate(&text);
        if !validation.is_valid {
            log::warn!("Input rejected: {}", validation.message);
            return Err(CliError::ValidationFailed(validation.message).into());
        }

        let target = self.target_words();
        log::info!("Summarizing to {target} words as {}", self.style);

        let result = summarizer.summarize(&text, target, &self.style);
        if let Some(error) = &result.error {
            return Err(CliError::SummarizationFailed(error.clone()).into());
        }

        let mut report = SummaryReport::new(&text, result);
        if self.format == OutputFormat::Text {
            report = report.with_key_points(summarizer.summarize(&text, KEY_POINTS_WORDS, "bullets"));
        }

        let mut formatter = create_formatter(self.format, open_output(self.output.as_deref())?);
        formatter.format_report(&report)?;
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Summary written to {}", path.display());
        }

        Ok(())
    }

    /// Word target from `--words`, then `--length`, then the default
    pub fn target_words(&self) -> usize {
        self.words
            .or_else(|| self.length.map(|tier| tier.default_target()))
            .unwrap_or(defaults::TARGET_WORDS)
    }
}
