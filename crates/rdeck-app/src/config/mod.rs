//! Configuration file parsing for Recipe Deck
//!
//! Supports `.rdeck/config.toml` in the working directory, with a per-user
//! fallback in the platform config directory.

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, user_config_path};
pub use types::*;
