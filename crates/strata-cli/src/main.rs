//! Strata CLI - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use strata_cli::{build_registry, execute, Args};
use strata_common::init_logging;
use strata_config::ConfigLoader;
use tracing::info;

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    // Initialize logging
    let mut logging = config.logging.to_logging_config();
    if let Some(level) = &args.log_level {
        logging.level = level.clone();
    }
    init_logging(logging)?;

    info!("Configuration loaded successfully");

    let registry = build_registry(&args, &config).context("Failed to set up translations")?;

    for line in execute(&args.command, &registry) {
        println!("{line}");
    }

    Ok(())
}
