//! Runtime configuration I/O.
//!
//! Resolves the user config file under the XDG config directory and loads
//! it, falling back to built-in defaults when the file is missing or
//! malformed. A broken config file must never prevent the vault from
//! starting.

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Path to the user config file (`~/.config/vaultbot/config.json`).
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vaultbot").join("config.json"))
}

/// Load configuration, preferring `explicit_path` when given.
///
/// Resolution order: explicit path (CLI flag) > user config file > defaults.
pub fn load(explicit_path: Option<&Path>) -> Config {
    if let Some(path) = explicit_path {
        return load_from_path(path);
    }

    match user_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Config::default(),
    }
}

/// Load a config file from a specific path, falling back to defaults.
pub fn load_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Malformed config {:?}: {}; using defaults", path, e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Cannot read config {:?}: {}; using defaults", path, e);
            Config::default()
        }
    }
}
