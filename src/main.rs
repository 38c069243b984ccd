//! Mindgauge - terminal mental-wellness self-assessment
//!
//! A local-first CLI that walks you through DASS-21 and STAR well-being
//! screening and scores the answers against the published rubrics.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mindgauge::cli;

fn main() -> Result<()> {
    // Parse first so --log-level can seed the filter; RUST_LOG wins
    let cli = cli::Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    cli::run(cli)
}
