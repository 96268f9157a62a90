//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use precis_core::SummarizerConfig;
use std::path::PathBuf;

const HEADER: &str = "\
# precis summarizer configuration
#
# Every key is optional; omitted keys keep the value shown here.
# Load with: precis summarize --config <FILE>
";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and add extra stop words");
        println!("2. Use it for summarizing:");
        println!(
            "   precis summarize input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Default configuration rendered as commented TOML
fn generate_template() -> Result<String> {
    let body = SummarizerConfig::default()
        .to_toml_string()
        .context("Failed to serialize default configuration")?;
    Ok(format!("{HEADER}\n{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("precis.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("precis.toml"));
    }

    #[test]
    fn test_generate_template() {
        let template = generate_template().unwrap();
        assert!(template.starts_with("# precis summarizer configuration"));
        assert!(template.contains("[segmentation]"));
        assert!(template.contains("[selection]"));
        assert!(template.contains("max_sentences = 6"));
    }

    #[test]
    fn test_template_round_trips() {
        let template = generate_template().unwrap();
        let config = SummarizerConfig::from_toml_str(&template).unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("precis.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[validation]"));
    }

    #[test]
    fn test_execute_bad_directory() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/precis.toml"),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
