use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::calories::{CalculationConfig, CalorieCalculator};
use crate::logging::LogConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Calculation constants
    pub calculation: CalculationConfig,

    /// Default body measurements for the CLI
    pub profile: ProfileDefaults,

    /// Logging settings
    pub logging: LogConfig,
}

/// Body measurements used when none are given on the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileDefaults {
    /// Weight in kilograms
    pub weight_kg: Option<f64>,

    /// Height in meters
    pub height_m: Option<f64>,
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::load_from_string(&content)
    }

    /// Load configuration from a TOML string
    pub fn load_from_string(content: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "Failed to parse TOML configuration")?;

        config
            .calculation
            .validate()
            .with_context(|| "Invalid [calculation] section")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".steptrack")
            .join("config.toml")
    }

    /// Load configuration from `path`, or `None` when the file does not exist
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from_file(path).map(Some)
    }

    /// Calculator built from the `[calculation]` section
    pub fn calculator(&self) -> Result<CalorieCalculator> {
        CalorieCalculator::new(self.calculation).with_context(|| "Invalid [calculation] section")
    }
}
