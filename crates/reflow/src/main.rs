//! Reflow CLI - inline-directive text normalizer.
//!
//! Provides commands for:
//! - `process`: Rewrite a text file in one pass
//! - `stream`: Rewrite stdin line by line

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::ProcessArgs;
use output::Output;

/// Reflow - inline-directive text normalizer.
#[derive(Parser)]
#[command(name = "reflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a text file in one pass.
    Process(ProcessArgs),
    /// Rewrite stdin line by line.
    Stream,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Process(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Process(args) => args.execute(),
        Commands::Stream => commands::stream(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
