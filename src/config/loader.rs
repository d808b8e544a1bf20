// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{ConfigFile, ConfigOverrides, MonitorConfig};
use crate::config::validate::resolve;
use crate::errors::{ChangewatchError, Result};

/// Load a configuration file from a given path.
///
/// This only performs TOML deserialization; merging with CLI values and
/// validation happen in [`resolve`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        ChangewatchError::Config(format!("reading config file at {:?}: {e}", path))
    })?;

    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load the optional config file, merge the CLI overrides on top and
/// validate the result.
pub fn load_and_resolve(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<MonitorConfig> {
    let file = match path {
        Some(p) => Some(load_from_path(p)?),
        None => None,
    };
    resolve(file, overrides)
}
