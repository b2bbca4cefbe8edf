//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application
//! configuration in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_NAME, DEFAULT_CALIBRATION_DPI};

/// Display calibration settings for the machine running the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Assumed pixel density of the viewing display, in dots per inch
    pub calibration_dpi: f64,
    /// Whether previews are scaled down to fit the viewport by default
    pub fit_preview: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            calibration_dpi: DEFAULT_CALIBRATION_DPI,
            fit_preview: true,
        }
    }
}

/// Preset document settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PresetConfig {
    /// Optional preset document to load at startup; a filesystem path or an
    /// HTTP(S) URL. The built-in list stays active when this fails.
    pub source: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Display calibration settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Preset document settings
    #[serde(default)]
    pub presets: PresetConfig,
}

impl Config {
    /// Gets the platform-specific configuration directory.
    ///
    /// - Linux: `~/.config/ScreenSimulator/`
    /// - macOS: `~/Library/Application Support/ScreenSimulator/`
    /// - Windows: `%APPDATA%\ScreenSimulator\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine configuration directory")?;
        Ok(base.join(APP_NAME.replace(' ', "")))
    }

    /// Gets the configuration file path.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns true if a configuration file exists.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Loads the configuration from disk, or defaults when none exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to disk, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Validates the configuration values.
    pub fn validate(&self) -> Result<()> {
        if !self.display.calibration_dpi.is_finite() || self.display.calibration_dpi < 1.0 {
            anyhow::bail!(
                "calibration_dpi must be at least 1 (got {})",
                self.display.calibration_dpi
            );
        }
        Ok(())
    }
}
