//! precis command-line entry point

use clap::Parser;
use precis_cli::commands::{init_logging, Commands};

/// Extractive text summarization from the command line
#[derive(Debug, Parser)]
#[command(name = "precis", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let (verbose, quiet) = cli.command.verbosity();
    init_logging(verbose, quiet);

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
