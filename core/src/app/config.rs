//! Configuration management (config.toml)
//!
//! Handles loading and providing defaults for application settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use std::path::{Path, PathBuf};

use andrones_shared::DEFAULT_ENGINE_BINARY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::library::StorageLayout;

const CONFIG_FILE_NAME: &str = "config.toml";
const CATEGORY_FILE_NAME: &str = "categories.json";

/// Application configuration.
///
/// Contains all user-configurable settings organized into sections.
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Storage locations
    #[serde(default)]
    pub storage: StorageConfig,
    /// Engine process settings
    #[serde(default)]
    pub engine: EngineConfig,
    /// Host display settings reported to the launch path
    #[serde(default)]
    pub display: DisplayConfig,
    /// Recently launched list
    #[serde(default)]
    pub recents: RecentsConfig,
}

/// Storage overrides. Unset fields use the platform defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Private cartridge storage (default: `<data_dir>/library`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_dir: Option<PathBuf>,
    /// Bundled assets root containing `roms/` (default: `assets/` next to the executable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
    /// Engine scripting directory (default: `<data_dir>/external`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine binary name or path (default: andrones-engine)
    #[serde(default = "default_engine_binary")]
    pub binary: String,
}

/// Display values the desktop host reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Host API level, selects the dimension probe (default: 34)
    #[serde(default = "default_api_level")]
    pub api_level: u32,
    /// Width in pixels (default: 1280)
    #[serde(default = "default_width")]
    pub width: i32,
    /// Height in pixels (default: 720)
    #[serde(default = "default_height")]
    pub height: i32,
    /// Report a television-class device (default: false)
    #[serde(default)]
    pub tv_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentsConfig {
    /// Maximum entries kept per category (default: 20)
    #[serde(default = "default_recents_limit")]
    pub limit: usize,
}

fn default_engine_binary() -> String {
    DEFAULT_ENGINE_BINARY.to_string()
}
fn default_api_level() -> u32 {
    34
}
fn default_width() -> i32 {
    1280
}
fn default_height() -> i32 {
    720
}
fn default_recents_limit() -> usize {
    20
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary: default_engine_binary(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            api_level: default_api_level(),
            width: default_width(),
            height: default_height(),
            tv_mode: false,
        }
    }
}

impl Default for RecentsConfig {
    fn default() -> Self {
        Self {
            limit: default_recents_limit(),
        }
    }
}

impl Config {
    /// Storage layout, with overrides taking precedence over defaults.
    pub fn storage_layout(&self) -> StorageLayout {
        let base = data_dir();
        StorageLayout {
            private_dir: self
                .storage
                .private_dir
                .clone()
                .or_else(|| base.as_ref().map(|dir| dir.join("library"))),
            external_dir: self
                .storage
                .external_dir
                .clone()
                .or_else(|| base.as_ref().map(|dir| dir.join("external"))),
        }
    }

    /// Bundled assets root.
    ///
    /// Falls back to `assets/` in the working directory when the executable
    /// location is unknown.
    pub fn assets_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.assets_dir {
            return absolute_or_same(dir);
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| absolute_or_same(Path::new("assets")))
    }

    /// Location of the category (recents) file.
    pub fn recents_path(&self) -> Option<PathBuf> {
        data_dir().map(|dir| dir.join(CATEGORY_FILE_NAME))
    }
}

fn absolute_or_same(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\AndroNES\config`
/// On macOS: `~/Library/Application Support/io.andrones.AndroNES`
/// On Linux: `~/.config/AndroNES`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.andrones", "", "AndroNES")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Returns the platform-specific data directory.
///
/// This is where imported cartridges, the scripting directory and the
/// recents file live. Returns `None` if the home directory cannot be
/// determined.
pub fn data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("io.andrones", "", "AndroNES")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

/// Loads the configuration from the platform's configuration directory.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    config_dir()
        .map(|dir| load_from(&dir.join(CONFIG_FILE_NAME)))
        .unwrap_or_default()
}

/// Loads the configuration from an explicit file.
pub fn load_from(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid config {}: {}", path.display(), e);
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}

/// Render the configuration as TOML.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
