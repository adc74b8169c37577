use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Application settings.
///
/// Loaded from a JSON file in the user's config directory:
/// - Linux: ~/.config/book-library/config.json
/// - macOS: ~/Library/Application Support/book-library/config.json
/// - Windows: %APPDATA%\book-library\config.json
///
/// Every field is optional in the file. Catalog contents are never stored here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub dark_theme: bool,
    /// Directory holding the seeded catalog's cover images
    pub asset_dir: PathBuf,
    pub card_width: f32,
    pub cover_height: f32,
    /// Leave edit mode when the book being edited is deleted
    pub clear_edit_on_delete: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Book Library".to_string(),
            dark_theme: true,
            asset_dir: PathBuf::from("assets"),
            card_width: 280.0,
            cover_height: 256.0,
            clear_edit_on_delete: false,
        }
    }
}

impl AppConfig {
    /// Load the config from the default location, falling back to defaults
    /// when no file exists
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Where the config file is expected to live
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("book-library");
        path.push("config.json");
        Some(path)
    }
}
