//! Configuration loading for CLI commands

use crate::error::CliError;
use anyhow::Result;
use precis_core::{Summarizer, SummarizerConfig};
use std::path::Path;

/// Load a summarizer configuration, falling back to defaults without a path
pub fn load_config(path: Option<&Path>) -> Result<SummarizerConfig> {
    let Some(path) = path else {
        return Ok(SummarizerConfig::default());
    };

    log::info!("Loading configuration from {}", path.display());
    SummarizerConfig::from_file(path).map_err(|e| CliError::ConfigError(e.to_string()).into())
}

/// Build a summarizer from an optional configuration file
pub fn load_summarizer(path: Option<&Path>) -> Result<Summarizer> {
    let config = load_config(path)?;
    Summarizer::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()).into())
}
