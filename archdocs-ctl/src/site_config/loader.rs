//! Config file discovery and loading for `archdocs.toml`.
//!
//! Checks two locations in precedence order:
//! 1. `./archdocs.toml` (project-local)
//! 2. `~/.config/archdocs.toml` (user-global)
//!
//! An explicitly passed path skips discovery and fails hard on errors.

use std::path::{Path, PathBuf};

use super::SiteConfig;
use crate::error::CtlError;

const CONFIG_FILENAME: &str = "archdocs.toml";
const GLOBAL_CONFIG_DIR: &str = ".config";

/// Load site config from `explicit` when given, otherwise from the first
/// discovered location, otherwise defaults.
pub(crate) fn load_site_config(explicit: Option<&Path>) -> Result<SiteConfig, CtlError> {
    if let Some(path) = explicit {
        let contents = std::fs::read_to_string(path).map_err(|e| CtlError::ConfigIo {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = toml::from_str(&contents).map_err(|e| CtlError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        tracing::debug!(?path, "Loaded site config");
        return Ok(config);
    }

    if let Some(path) = find_config_file() {
        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    tracing::debug!(?path, "Loaded site config");
                    return Ok(config);
                }
                Err(e) => {
                    tracing::warn!(?path, error = %e, "Failed to parse site config, using defaults");
                }
            },
            Err(e) => {
                tracing::warn!(?path, error = %e, "Failed to read site config, using defaults");
            }
        }
    }
    Ok(SiteConfig::default())
}

/// Search for a config file in precedence order.
fn find_config_file() -> Option<PathBuf> {
    // 1. Project-local: ./archdocs.toml
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.is_file() {
        return Some(local);
    }

    // 2. User-global: ~/.config/archdocs.toml
    if let Some(home) = home_dir() {
        let global = home.join(GLOBAL_CONFIG_DIR).join(CONFIG_FILENAME);
        if global.is_file() {
            return Some(global);
        }
    }

    None
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
