//! Configuration management for yardstick
//!
//! Config stored at: ~/.config/yardstick/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use yardstick_domain::DepthUnit;
use yardstick_types::{ConfigError, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Content document override (defaults to the data dir)
    #[serde(default)]
    pub content_path: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Unit assumed for aggregate depth when --unit is not given
    #[serde(default)]
    pub default_depth_unit: DepthUnit,

    /// Local override of the aggregate calculator's waste allowance
    #[serde(default)]
    pub aggregate_waste_pct: Option<f64>,

    /// Local override of the concrete calculator's waste allowance
    #[serde(default)]
    pub concrete_waste_pct: Option<f64>,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            output_format: default_output_format(),
            default_depth_unit: DepthUnit::default(),
            aggregate_waste_pct: None,
            concrete_waste_pct: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("yardstick");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Content document path: the override, or `<data dir>/yardstick/content.json`
    pub fn content_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.content_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("yardstick");
        Ok(data_dir.join("content.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

fn describe_override(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}%", v),
        None => "(from content)".to_string(),
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Yardstick Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Content file:     {}",
            self.content_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:    {}", self.output_format)?;
        writeln!(f, "Depth unit:       {}", self.default_depth_unit)?;
        writeln!(f, "Aggregate waste:  {}", describe_override(self.aggregate_waste_pct))?;
        writeln!(f, "Concrete waste:   {}", describe_override(self.concrete_waste_pct))?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
