//! Validate command implementation

use crate::config::load_summarizer;
use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Input file (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Configuration file providing the validation thresholds
    #[arg(short, long, value_name = "FILE", env = "PRECIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let summarizer = load_summarizer(self.config.as_deref())?;
        let text = FileReader::read_source(self.input.as_deref())?;
        let result = summarizer.validate(&text);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if result.is_valid {
            println!("✓ {}", result.message);
            println!("  Words: {}", result.word_count);
            println!("  Sentences: {}", result.sentence_count);
        } else {
            println!("✗ Text cannot be summarized");
            println!("  {}", result.message);
        }

        if result.is_valid {
            Ok(())
        } else {
            log::warn!("Input rejected: {}", result.message);
            Err(CliError::ValidationFailed(result.message).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args_for(text: &str, dir: &TempDir) -> ValidateArgs {
        let path = dir.path().join("input.txt");
        fs::write(&path, text).unwrap();
        ValidateArgs {
            input: Some(path),
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            input: Some(PathBuf::from("notes.txt")),
            config: None,
            json: true,
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("notes.txt"));
    }

    #[test]
    fn test_validate_valid_text() {
        let dir = TempDir::new().unwrap();
        let text = "Rivers carry sediment from the mountains to the sea every single year. \
            Deltas form where that sediment settles in calm coastal water near river mouths. \
            Many of the largest cities in the world were built on fertile river deltas.";
        assert!(args_for(text, &dir).execute().is_ok());
    }

    #[test]
    fn test_validate_short_text() {
        let dir = TempDir::new().unwrap();
        let err = args_for("Only a few words here.", &dir)
            .execute()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: Text too short: 5 words (minimum 30 required)"
        );
    }

    #[test]
    fn test_validate_with_config_thresholds() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("precis.toml");
        fs::write(&config, "[validation]\nmin_words = 3\nmin_sentences = 1\n").unwrap();

        let mut args = args_for("Only a few words here.", &dir);
        args.config = Some(config);
        assert!(args.execute().is_ok());
    }
}
