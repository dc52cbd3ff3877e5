//! Minute-bar session generator CLI.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use minutebars_config::load_config;
use minutebars_monitor::setup_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    // Setup logging
    let log_level = cli
        .log_level
        .as_ref()
        .map(|l| l.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.format.eq_ignore_ascii_case("json");
    let _guard = setup_logging(&log_level, json, config.logging.file.as_deref());

    // Execute command
    match cli.command {
        Commands::Generate(args) => cli::commands::generate::run(args, config),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config, &config),
    }
}
