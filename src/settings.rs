//! Watch preferences
//!
//! Persisted as JSON in the platform config directory. Loading never fails:
//! a missing or corrupt file falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User preferences, saved on change and at exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Inverted (dark) glyph assets
    pub night_enabled: bool,
    /// 24-hour clock; also narrows the time block's reflection bound
    pub clock_24h: bool,
    /// Month/day order on the date line
    pub date_month_first: bool,
    /// Which block rides above the other
    pub time_on_top: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            night_enabled: false,
            clock_24h: false,
            date_month_first: true,
            time_on_top: false,
        }
    }
}

impl Settings {
    fn storage_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ricochet-face").map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, or defaults.
    pub fn load() -> Self {
        match Self::storage_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available; using default settings");
                Self::default()
            }
        }
    }

    /// Load from an explicit path, or defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring corrupt settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save to the config directory. Failures are logged, never fatal.
    pub fn save(&self) {
        if let Some(path) = Self::storage_path() {
            self.save_to(&path);
        }
    }

    /// Save to an explicit path.
    pub fn save_to(&self, path: &Path) {
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                log::warn!("Could not create {}: {err}", dir.display());
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => log::warn!("Could not write {}: {err}", path.display()),
            },
            Err(err) => log::warn!("Could not serialize settings: {err}"),
        }
    }
}
