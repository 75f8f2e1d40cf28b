//! Configuration types for Recipe Deck
//!
//! `Settings` mirrors `.rdeck/config.toml`. Every section and field has a
//! default, so a partial file is valid.

use std::time::Duration;

use rdeck_source::HttpSourceConfig;
use serde::{Deserialize, Serialize};

/// Locator used when neither the CLI nor the config file names one
pub const DEFAULT_SOURCE_URL: &str = "https://dummyjson.com/recipes";

/// Application settings (.rdeck/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// HTTP client configuration derived from the `[source]` section
    pub fn http_config(&self) -> HttpSourceConfig {
        HttpSourceConfig::default().with_timeout(Duration::from_secs(self.source.timeout_secs))
    }
}

/// Where recipes come from
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// `http(s)://` URL or path to a local JSON file
    #[serde(default = "default_source_url")]
    pub url: String,

    /// Whole-request timeout for HTTP sources
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Presentation toggles
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the image URL line on recipe cards and in the detail view
    #[serde(default = "default_true")]
    pub show_images: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_images: true }
    }
}

fn default_true() -> bool {
    true
}
