use crate::config::{CONFIG_FILE_NAME, VitaeConfig};
use crate::error::VitaeError;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(dir: &Path) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(VitaeError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = VitaeConfig::default();
    config.save(&config_path)?;

    println!("{} vitae config in {}", "Initialized".green(), dir.display());
    println!("  Config: {}", config_path.display());
    println!("  Output: {}", config.output_path(dir).display());

    Ok(())
}
