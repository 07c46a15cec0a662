//! Etude demonstration harness.
//!
//! Runs each component through a fixed scripted sequence of calls and
//! prints the results. Illustrative only - the reusable APIs live in
//! `etude-skip` and `etude-feed`.
//!
//! # Quick Start
//!
//! ```bash
//! # Walk the skip-aware sequence through its script
//! etude skip
//!
//! # Walk the micro feed through its script
//! etude feed
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Etude - scripted demonstrations of the workspace components.
#[derive(Parser)]
#[command(name = "etude")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the skip-aware sequence demonstration.
    Skip,

    /// Run the micro feed demonstration.
    Feed,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Skip => commands::skip::run(),
        Commands::Feed => commands::feed::run(),
    }
}
