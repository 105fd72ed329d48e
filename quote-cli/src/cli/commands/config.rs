//! Config file commands

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::cli::ConfigCommands;
use crate::config::{Config, config_path};

/// Handle config subcommands
pub fn handle_config_command(
    command: ConfigCommands,
    config: &Config,
    config_override: Option<&Path>,
) -> Result<()> {
    let path = config_override
        .map(Path::to_path_buf)
        .unwrap_or_else(config_path);

    match command {
        ConfigCommands::Show => {
            println!("{} {}", "Config file:".dimmed(), path.display());
            let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
            println!("{}", text);
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(&path)?;
            println!("Config written to: {}", path.display().to_string().bright_green());
        }
    }
    Ok(())
}
