//! CLI handler for the config file.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;

use super::args::{ConfigCliArgs, ConfigCommand};

/// Load `path` when given, otherwise the default user config.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn handle_config_command(args: ConfigCliArgs, path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_config(path)?;
            let content = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            println!("{}", content);
        }
        ConfigCommand::Path => {
            println!("{}", config_path(path)?.display());
        }
        ConfigCommand::Init { force } => {
            let path = config_path(path)?;
            if path.exists() && !force {
                bail!(
                    "Config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}

fn config_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}
