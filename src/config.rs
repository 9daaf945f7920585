use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::menu::DEFAULT_MINIMUM_WIDTH;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Enables usage warnings and navigation tracing
    #[serde(default)]
    pub debug_mode: bool,
    #[serde(default)]
    pub draw: DrawConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

/// Drawing limits checked by menus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfig {
    pub minimum_console_width: u16,
}

/// Size and placement of the demo menu's console
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub menu_width: u16,
    pub menu_height: u16,
    pub menu_x: u16,
    pub menu_y: u16,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            minimum_console_width: DEFAULT_MINIMUM_WIDTH,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            menu_width: 20,
            menu_height: 8,
            menu_x: 10,
            menu_y: 0,
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text, filling in missing sections
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("", "", "gridmenu")
            .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}
