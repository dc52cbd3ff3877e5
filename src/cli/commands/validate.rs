//! Validate configuration command.

use anyhow::Result;
use minutebars_config::AppConfig;
use std::path::Path;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("(file not found, using defaults and environment)");
    }

    match config.validate() {
        Ok(()) => {
            println!("Configuration is valid!");
            println!();
            print!("{}", config.to_toml()?);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
