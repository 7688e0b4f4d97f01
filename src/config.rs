//! Configuration loading
//!
//! Reads `~/.config/typeahead/config.toml` unless a path is given explicitly.
//! A missing default file means defaults; a missing explicit file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::TypeaheadError;

mod types;

pub use types::{
    Config, DEFAULT_PLACEHOLDER, DEFAULT_REGISTRY_URL, RegistryConfig, SearchConfig, UiConfig,
};

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Location of the default config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `explicit`, or from the default location
pub fn load_config(explicit: Option<&Path>) -> Result<Config, TypeaheadError> {
    if let Some(path) = explicit {
        return load_config_from_path(path);
    }

    match config_path() {
        Some(path) if path.is_file() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TypeaheadError> {
    let contents = fs::read_to_string(path).map_err(|source| TypeaheadError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&contents, path)
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config, TypeaheadError> {
    toml::from_str::<Config>(content).map_err(|e| TypeaheadError::ConfigParse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
