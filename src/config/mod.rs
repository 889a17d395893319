use crate::global;
use crate::normalizer::NormalizationOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for every normalization run. CLI flags override these.
    pub normalizer: NormalizationOptions,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the full result as JSON instead of just the cleaned text.
    pub json: bool,
    /// Skip the full pipeline when the quick check finds nothing to fix.
    pub skip_clean_input: bool,
}

impl Config {
    /// Load the user config, writing a default one first if none exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save_to(&config_path)?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::PreserveMode;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_matches_default_options() {
        let config = Config::default();
        assert_eq!(config.normalizer, NormalizationOptions::default());
        assert!(!config.output.json);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.normalizer.custom_fillers = vec!["like".to_string()];
        config.normalizer.preserve_mode = PreserveMode::CountOnly;
        config.output.json = true;
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[normalizer]\ncapitalize_sentences = false\npreserve_words = [\"honestly\"]\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        let options = &config.normalizer;

        assert!(!options.capitalize_sentences);
        assert!(options.remove_fillers);
        assert_eq!(options.preserve_words, vec!["honestly"]);
        assert_eq!(options.preserve_mode, PreserveMode::Keep);
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[normalizer\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
