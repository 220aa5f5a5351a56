//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{
    APP_NAME, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_ZOOM, ITEMS_FILE, LINKS_FILE,
    MAX_ZOOM, MIN_ZOOM, PLACES_FILE,
};
use crate::models::{GeoPoint, RgbColor};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Locations of the three CSV tables.
///
/// Each table can be pointed at individually; anything left unset resolves
/// against `dir` (or a `data/` directory next to the working directory when
/// `dir` is also unset).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DataConfig {
    /// Directory containing `places.csv`, `links.csv`, and `items.csv`
    pub dir: Option<PathBuf>,
    /// Explicit path to the places table
    #[serde(default)]
    pub places_file: Option<PathBuf>,
    /// Explicit path to the links table
    #[serde(default)]
    pub links_file: Option<PathBuf>,
    /// Explicit path to the items table
    #[serde(default)]
    pub items_file: Option<PathBuf>,
}

impl DataConfig {
    fn resolve(&self, explicit: Option<&PathBuf>, file_name: &str) -> PathBuf {
        if let Some(path) = explicit {
            return path.clone();
        }
        self.dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("data"))
            .join(file_name)
    }

    /// Resolved path to the places table.
    #[must_use]
    pub fn places_path(&self) -> PathBuf {
        self.resolve(self.places_file.as_ref(), PLACES_FILE)
    }

    /// Resolved path to the links table.
    #[must_use]
    pub fn links_path(&self) -> PathBuf {
        self.resolve(self.links_file.as_ref(), LINKS_FILE)
    }

    /// Resolved path to the items table.
    #[must_use]
    pub fn items_path(&self) -> PathBuf {
        self.resolve(self.items_file.as_ref(), ITEMS_FILE)
    }
}

/// Initial viewport settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Latitude the viewport centers on at startup
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    /// Longitude the viewport centers on at startup
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,
    /// Starting zoom level
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

fn default_center_lat() -> f64 {
    DEFAULT_CENTER_LAT
}

fn default_center_lon() -> f64 {
    DEFAULT_CENTER_LON
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lon: default_center_lon(),
            zoom: default_zoom(),
        }
    }
}

impl MapConfig {
    /// Starting viewport center, clamped to valid coordinates.
    #[must_use]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lon).clamped()
    }

    /// Starting zoom, clamped to the supported range.
    #[must_use]
    pub fn initial_zoom(&self) -> u8 {
        self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
    }
}

/// One legend row, pairing a label with a marker color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Text shown next to the swatch
    pub label: String,
    /// Swatch color, written as a hex string like `"#7678ED"`
    pub color: RgbColor,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the welcome overlay on startup
    #[serde(default = "default_show_welcome")]
    pub show_welcome: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Width of the detail sidebar in terminal columns
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
    /// Legend rows shown in the map corner; an empty list hides the legend
    #[serde(default = "default_legend")]
    pub legend: Vec<LegendEntry>,
}

/// Default sidebar width in columns
fn default_sidebar_width() -> u16 {
    36
}

fn default_show_welcome() -> bool {
    true
}

fn default_legend() -> Vec<LegendEntry> {
    let entry = |label: &str, hex: &str| LegendEntry {
        label: label.to_string(),
        color: RgbColor::from_hex(hex).unwrap_or_default(),
    };
    vec![
        entry("Hubs", "#7678ED"),
        entry("Graphics", "#3D348B"),
        entry("Publishing", "#F35B04"),
        entry("Objects", "#F7B801"),
        entry("Architecture", "#6FC572"),
    ]
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_welcome: true,
            theme_mode: ThemeMode::default(),
            sidebar_width: default_sidebar_width(),
            legend: default_legend(),
        }
    }
}

/// Diagnostic logging configuration.
///
/// The interface stays quiet about skipped records; the log file is where
/// those diagnostics go when a path is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Append log lines to this file; unset disables logging
    pub file: Option<PathBuf>,
    /// Log level filter ("error", "warn", "info", "debug", "trace")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/hubmap/config.toml`
/// - macOS: `~/Library/Application Support/hubmap/config.toml`
/// - Windows: `%APPDATA%\hubmap\config.toml`
///
/// # Validation
///
/// - `center_lat` must be within [-90, 90] and `center_lon` within [-180, 180]
/// - `sidebar_width` must be nonzero
/// - Data files are not required to exist; a missing table degrades the
///   session at load time instead of failing validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// CSV table locations
    #[serde(default)]
    pub data: DataConfig,
    /// Initial viewport settings
    #[serde(default)]
    pub map: MapConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Diagnostic logging
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/hubmap/`
    /// - macOS: `~/Library/Application Support/hubmap/`
    /// - Windows: `%APPDATA%\hubmap\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        // Serialize to TOML
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        // Write to temp file
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        // Atomic rename
        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.map.center_lat) {
            anyhow::bail!(
                "map.center_lat must be within [-90, 90], got {}",
                self.map.center_lat
            );
        }
        if !(-180.0..=180.0).contains(&self.map.center_lon) {
            anyhow::bail!(
                "map.center_lon must be within [-180, 180], got {}",
                self.map.center_lon
            );
        }
        if self.ui.sidebar_width == 0 {
            anyhow::bail!("ui.sidebar_width must be nonzero");
        }

        Ok(())
    }
}
