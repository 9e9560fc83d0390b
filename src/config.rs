use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dispatch::Keymap;
use crate::error::Result;

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Action name to key specs, e.g. `move_project = ["x", "space"]`.
    /// Listed actions lose their default keys.
    #[serde(default)]
    pub keys: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path())
    }

    /// Missing files load as defaults; unreadable or malformed ones are errors.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Creates an empty config file. Returns false if one already exists.
    pub fn init() -> Result<bool> {
        Self::init_at(&get_config_path())
    }

    pub fn init_at(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, "")?;
        Ok(true)
    }

    pub fn keymap(&self) -> Result<Keymap> {
        Keymap::new(&self.keys)
    }

    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(file) => resolve_path(file),
            None => get_config_dir().join("projboard.log"),
        }
    }
}

/// Resolve a path to absolute, joining with cwd if relative.
#[must_use]
pub fn resolve_path(path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

pub fn get_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("projboard")
}

pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}
