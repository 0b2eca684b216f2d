//! The main config loading module for ffm.
//!
//! Handles loading and deserializing settings from `ffm.toml`.
//!
//! Provides the main [Config] struct, as well as the internal [RawConfig] used for parsing.
//! The file is only ever read; ffm never writes configuration back.

use crate::config::{Display, General, Keys, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for ffm
#[derive(Debug, Default)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    ///
    /// Called by entry point to load config at startup.
    pub fn load() -> Self {
        let path = Self::default_path();

        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Load configuration from `path`, reporting parse errors on stderr and
    /// falling back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    eprintln!("[ffm] Error parsing config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("[ffm] Cannot read config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }

    /// Determine the default configuration file path.
    /// Checks the FFM_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/ffm/ffm.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("FFM_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("ffm/ffm.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/ffm/ffm.toml");
        }
        PathBuf::from("ffm.toml")
    }
}
