//! Glide configuration file handling

use anyhow::{Context, Result};
use glide_animation::ManagerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "glide.toml";

/// Top-level Glide configuration (glide.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlideConfig {
    #[serde(default)]
    pub manager: ManagerConfig,
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Settings for the demo animations
#[derive(Debug, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Length of one animation segment in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// How far the demo window travels, in pixels
    #[serde(default = "default_distance")]
    pub distance: i32,
    /// How often the window position is reported, in milliseconds
    #[serde(default = "default_report_ms")]
    pub report_ms: u64,
}

fn default_duration_ms() -> u64 {
    1000
}

fn default_distance() -> i32 {
    500
}

fn default_report_ms() -> u64 {
    100
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            distance: default_distance(),
            report_ms: default_report_ms(),
        }
    }
}

impl GlideConfig {
    /// Load configuration from a file or a directory containing glide.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No config found at {}. Run `glide init` to create one.",
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: GlideConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(config)
    }

    /// Load glide.toml from the current directory, falling back to defaults
    pub fn load_or_default() -> Result<Self> {
        let path = Path::new(CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_default_independently() {
        let config: GlideConfig = toml::from_str(
            r#"
            [manager]
            timeout_ms = 10

            [demo]
            distance = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.manager.timeout_ms, 10);
        assert!(!config.manager.autostart);
        assert_eq!(config.demo.distance, 120);
        assert_eq!(config.demo.duration_ms, 1000);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: GlideConfig = toml::from_str("").unwrap();
        assert_eq!(config.manager, ManagerConfig::default());
        assert_eq!(config.demo.report_ms, 100);
    }
}
