//! Animation manager configuration

use crate::error::{AnimationError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Settings for an [`AnimationManager`](crate::manager::AnimationManager)
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Interval between ticks in milliseconds; 0 ticks as fast as possible
    pub timeout_ms: u32,
    /// Start the timer as soon as the manager is built
    pub autostart: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            autostart: false,
        }
    }
}

/// Roughly one tick per 60Hz frame
fn default_timeout_ms() -> u32 {
    16
}

impl ManagerConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.timeout_ms as u64)
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| AnimationError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .map_err(|e| AnimationError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AnimationError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = ManagerConfig::from_toml_str("autostart = true").unwrap();
        assert_eq!(config.timeout_ms, 16);
        assert!(config.autostart);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ManagerConfig {
            timeout_ms: 10,
            autostart: false,
        };
        let text = config.to_toml().unwrap();
        assert_eq!(ManagerConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ManagerConfig::from_toml_str("timeout_ms = \"fast\"").unwrap_err();
        assert!(matches!(err, AnimationError::Config(_)));
    }
}
