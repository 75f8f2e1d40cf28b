//! Settings loader for .rdeck/config.toml
//!
//! Lookup order: `<dir>/.rdeck/config.toml`, then
//! `<user-config-dir>/recipe-deck/config.toml`, then built-in defaults.
//! A file that cannot be read or parsed is logged and skipped.

use std::path::{Path, PathBuf};

use super::types::Settings;
use rdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const RDECK_DIR: &str = ".rdeck";
const USER_CONFIG_DIR: &str = "recipe-deck";

/// Load settings for a working directory
pub fn load_settings(dir: &Path) -> Settings {
    let project = dir.join(RDECK_DIR).join(CONFIG_FILENAME);
    if let Some(settings) = read_settings_file(&project) {
        return settings;
    }

    if let Some(user) = user_config_path() {
        if let Some(settings) = read_settings_file(&user) {
            return settings;
        }
    }

    debug!("No usable config file, using defaults");
    Settings::default()
}

/// Path of the per-user config file, when the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(CONFIG_FILENAME))
}

fn read_settings_file(path: &Path) -> Option<Settings> {
    if !path.exists() {
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                Some(settings)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Create `.rdeck/config.toml` with commented defaults if it does not exist
///
/// Returns the path of the config file.
pub fn init_config_dir(dir: &Path) -> Result<PathBuf> {
    let rdeck_dir = dir.join(RDECK_DIR);

    if !rdeck_dir.exists() {
        std::fs::create_dir_all(&rdeck_dir)
            .map_err(|e| Error::config(format!("Failed to create .rdeck dir: {}", e)))?;
    }

    let config_path = rdeck_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Recipe Deck Configuration

[source]
# http(s) URL or path to a local JSON file with a top-level "recipes" array
url = "https://dummyjson.com/recipes"
# Request timeout for HTTP sources, in seconds
timeout_secs = 30

[ui]
# Show image URLs on cards and in the detail view
show_images = true
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}
