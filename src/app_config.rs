use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::highlight::window::{default_collapsed_window, default_expanded_window};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Highlighting settings
    #[serde(default)]
    pub highlight: HighlightConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Highlight marker and snippet window settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HighlightConfig {
    // @field: Element wrapped around each match
    #[serde(default = "default_marker_tag")]
    pub marker_tag: String,

    // @field: Class attribute of the marker, empty for none
    #[serde(default = "default_marker_class")]
    pub marker_class: String,

    // @field: Paragraphs shown in a collapsed snippet
    #[serde(default = "default_collapsed_window")]
    pub collapsed_window: usize,

    // @field: Paragraphs shown in an expanded snippet
    #[serde(default = "default_expanded_window")]
    pub expanded_window: usize,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            marker_tag: default_marker_tag(),
            marker_class: default_marker_class(),
            collapsed_window: default_collapsed_window(),
            expanded_window: default_expanded_window(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_marker_tag() -> String {
    "mark".to_string()
}

fn default_marker_class() -> String {
    "highlight".to_string()
}

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "snipmark.json";

/// Per-user config location, if the platform has a config directory
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("snipmark").join("config.json"))
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let highlight = &self.highlight;

        if highlight.marker_tag.is_empty()
            || !highlight.marker_tag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(anyhow!("Invalid marker tag: '{}'", highlight.marker_tag));
        }

        if highlight.marker_class.contains(['"', '<', '>']) {
            return Err(anyhow!("Invalid marker class: '{}'", highlight.marker_class));
        }

        if highlight.collapsed_window == 0 || highlight.expanded_window == 0 {
            return Err(anyhow!("Snippet window sizes must be at least 1"));
        }

        if highlight.collapsed_window > highlight.expanded_window {
            return Err(anyhow!(
                "Collapsed window ({}) is larger than expanded window ({})",
                highlight.collapsed_window,
                highlight.expanded_window
            ));
        }

        Ok(())
    }

    /// Load a configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Write the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        std::fs::write(path, json)
            .context(format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Resolve the config to use
    ///
    /// An explicit path must exist. Otherwise `snipmark.json` in the working
    /// directory is tried, then the per-user config file, then defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(local);
        }

        if let Some(user) = user_config_path().filter(|p| p.exists()) {
            return Self::from_file(user);
        }

        Ok(Self::default())
    }
}
