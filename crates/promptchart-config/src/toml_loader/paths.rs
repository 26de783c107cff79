//! Config path resolution and default file creation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use promptchart_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that relocates the default config file.
pub const CONFIG_PATH_ENV: &str = "PROMPTCHART_CONFIG";

/// Default config file: `$PROMPTCHART_CONFIG` when set and non-empty,
/// otherwise `<config_dir>/promptchart/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_PATH_ENV))
}

pub(crate) fn resolve_config_path(env_override: Option<OsString>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    let config_dir = dirs::config_dir().ok_or_else(|| {
        ConfigError::ParseError(format!(
            "could not determine config directory; set {CONFIG_PATH_ENV} or pass --config"
        ))
    })?;
    Ok(config_dir.join("promptchart").join("config.toml"))
}

/// Write the commented default config, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!(path = %path.display(), "created default promptchart config");
    Ok(())
}
