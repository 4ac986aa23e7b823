use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::params::SimParams;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "CONPHYS_CONFIG";
/// Config file read when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/conphys.toml";

/// Top-level simulation configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub params: SimParams,
    /// Right-hand world boundary in simulation units (left is x = 0).
    pub world_width: f64,
    /// Fixed frame rate in Hz.
    pub frame_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            params: SimParams::default(),
            // 1400 px window minus the 250 px settings and 300 px object panels.
            world_width: 850.0,
            frame_rate: 60.0,
        }
    }
}

impl SimConfig {
    /// Fixed timestep in seconds.
    pub fn frame_dt(&self) -> f64 {
        1.0 / self.frame_rate
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.params.validate()?;
        if !(self.world_width.is_finite() && self.world_width > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world_width must be > 0, got {}",
                self.world_width
            )));
        }
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_rate must be > 0, got {}",
                self.frame_rate
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load config from `CONPHYS_CONFIG` or `config/conphys.toml`. Falls back
    /// to defaults if the file is missing or unusable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load {path}: {e}, using defaults");
                Self::default()
            },
        }
    }
}
