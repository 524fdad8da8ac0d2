//! pubrx CLI - manuscript preprocessor.
//!
//! Provides commands for:
//! - `preprocess`: Expand directives in every manuscript document
//! - `postprocess`: Clean up HTML produced from preprocessed documents

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PostprocessArgs, PreprocessArgs};
use output::Output;

/// pubrx - manuscript preprocessor.
#[derive(Parser)]
#[command(name = "pubrx", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand directives in manuscript documents.
    Preprocess(PreprocessArgs),
    /// Clean up converted HTML.
    Postprocess(PostprocessArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Preprocess(args) => args.verbose,
        Commands::Postprocess(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Preprocess(args) => args.execute(),
        Commands::Postprocess(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
