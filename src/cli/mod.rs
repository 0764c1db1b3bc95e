//! Command-line interface for upconf
//!
//! Provides `resolve` and `locate` subcommands over the library pipeline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod locate;
mod resolve;

/// Locate and merge nested configuration from ancestor directories
#[derive(Parser)]
#[command(name = "upconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve configuration files and print the merged value as JSON
    Resolve(resolve::ResolveArgs),

    /// Print the path of the nearest matching file in an ancestor directory
    Locate(locate::LocateArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Resolve(args) => resolve::run(args),
        Commands::Locate(args) => locate::run(args),
    }
}
