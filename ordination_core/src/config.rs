//! Configuration file support for the ordination system.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/ordination/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dosing: DosingConfig,
}

/// Weight-class thresholds for recommended-dose calculation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DosingConfig {
    /// Patients strictly below this weight are classed light
    #[serde(default = "default_light_weight_max_kg")]
    pub light_weight_max_kg: f64,

    /// Patients strictly above this weight are classed heavy
    #[serde(default = "default_heavy_weight_min_kg")]
    pub heavy_weight_min_kg: f64,
}

impl Default for DosingConfig {
    fn default() -> Self {
        Self {
            light_weight_max_kg: default_light_weight_max_kg(),
            heavy_weight_min_kg: default_heavy_weight_min_kg(),
        }
    }
}

// Default value functions
fn default_light_weight_max_kg() -> f64 {
    25.0
}

fn default_heavy_weight_min_kg() -> f64 {
    120.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        if config.dosing.light_weight_max_kg >= config.dosing.heavy_weight_min_kg {
            return Err(Error::Config(format!(
                "light threshold ({} kg) must lie below heavy threshold ({} kg)",
                config.dosing.light_weight_max_kg, config.dosing.heavy_weight_min_kg
            )));
        }
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("ordination").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
