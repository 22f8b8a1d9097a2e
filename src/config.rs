//! Display configuration: user file, system file, or built-in default

use crate::error::{AboutError, Result};
use dirs::config_dir;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_CONFIG_PATH: &str = "/usr/share/synabout/config.toml";
const DEFAULT_CONFIG: &str = include_str!("../config/config.toml");

#[derive(Deserialize, Debug)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize, Debug)]
pub struct DisplayConfig {
    pub items: Vec<ConfigEntry>,
    pub separator: Option<String>,
    pub ascii_path: Option<String>,
    pub ascii_color: String,
    pub use_default_ascii: Option<bool>,
    pub more_info_command: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ConfigEntry {
    pub key: String,
    #[serde(rename = "type")]
    pub r#type: String,
    pub value: String,
    pub color: Option<String>,
    pub value_color: Option<String>,
}

fn user_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("synabout/config.toml"))
}

/// Seed the user config from the packaged default on first run
pub fn ensure_user_config_exists() {
    let Some(user_path) = user_config_path() else {
        return;
    };
    if user_path.exists() {
        return;
    }
    if let Some(parent) = user_path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let created = if Path::new(SYSTEM_CONFIG_PATH).exists() {
        fs::copy(SYSTEM_CONFIG_PATH, &user_path).map(|_| ())
    } else {
        fs::write(&user_path, DEFAULT_CONFIG)
    };
    match created {
        Ok(()) => println!("Created config at {}", user_path.display()),
        Err(err) => eprintln!("Could not create {}: {}", user_path.display(), err),
    }
}

/// Load the effective config: user file, then system file, then built-in
pub fn load_config() -> Result<Config> {
    let path = user_config_path()
        .filter(|p| p.exists())
        .or_else(|| Some(PathBuf::from(SYSTEM_CONFIG_PATH)).filter(|p| p.exists()));

    match path {
        Some(path) => {
            let contents = fs::read_to_string(&path)?;
            toml::de::from_str(&contents).map_err(|err| {
                AboutError::Config(format!("{}: {}", path.display(), err))
            })
        }
        None => Ok(default_config()),
    }
}

/// The packaged default, compiled into the binary
pub fn default_config() -> Config {
    toml::de::from_str(DEFAULT_CONFIG).expect("packaged default config is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_default_parses() {
        let config = default_config();
        assert!(!config.display.items.is_empty());
        assert!(config.colors.contains_key(&config.display.ascii_color));
    }

    #[test]
    fn default_covers_every_panel_row() {
        let config = default_config();
        let values: Vec<&str> = config
            .display
            .items
            .iter()
            .map(|entry| entry.value.as_str())
            .collect();
        for row in ["processor", "memory", "graphics", "startup_disk", "os_version"] {
            assert!(values.contains(&row), "missing row: {}", row);
        }
    }
}
