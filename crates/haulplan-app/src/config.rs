//! Configuration management for haulplan
//!
//! Config stored at: ~/.config/haulplan/config.json

use haulplan_domain::service::PackingSettings;
use haulplan_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Vehicle catalog TOML replacing the built-in reference table
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Allow cargo units to be stacked when packing
    #[serde(default = "default_true")]
    pub stacking: bool,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            catalog_path: None,
            stacking: true,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("haulplan");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn packing(&self) -> PackingSettings {
        PackingSettings {
            stacking: self.stacking,
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Haulplan Configuration")?;
        writeln!(f, "======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(
            f,
            "Catalog:        {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in reference table)".to_string())
        )?;
        writeln!(f, "Stacking:       {}", self.stacking)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
