//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod demo;
pub mod generate_config;
pub mod summarize;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize a text file or standard input
    Summarize(summarize::SummarizeArgs),

    /// Check whether a text is long enough to summarize
    Validate(validate::ValidateArgs),

    /// Summarize a built-in sample text in every style
    Demo(demo::DemoArgs),

    /// Write the default configuration as a TOML file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Summarize(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Demo(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }

    /// Verbosity count and quiet flag requested on the command line
    pub fn verbosity(&self) -> (u8, bool) {
        match self {
            Commands::Summarize(args) => (args.verbose, args.quiet),
            _ => (0, false),
        }
    }
}

/// Log filter for a `-v` count
fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level
///
/// Call once per process. `RUST_LOG` takes precedence over the `-v` count.
/// Nothing is initialized in quiet mode.
pub fn init_logging(verbose: u8, quiet: bool) {
    if !quiet {
        let env = env_logger::Env::default().default_filter_or(log_level(verbose));
        env_logger::Builder::from_env(env).init();
    }
}
