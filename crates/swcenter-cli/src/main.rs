//! Software Center command line helpers - main entry point.
//!
//! Loads the configuration, sets up logging and runs one command.

mod commands;

use clap::Parser;
use swcenter_core::StoreConfig;

use crate::commands::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match StoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{} - using default configuration", e);
            StoreConfig::default()
        }
    };

    match commands::run(&config, cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
