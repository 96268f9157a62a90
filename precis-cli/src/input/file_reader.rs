//! File and stdin reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads the text to summarize as UTF-8
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    }

    /// Read `path`, or stdin when the path is absent or `-`
    pub fn read_source(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) if path != Path::new("-") => {
                log::debug!("Reading input from {}", path.display());
                Self::read_text(path)
            }
            _ => {
                log::debug!("Reading input from stdin");
                Self::read_stdin()
            }
        }
    }
}
