//! Core TOML config loading: read from path or platform default.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::schema::LumenConfig;
use crate::validation;
use lumen_common::ConfigError;
use tracing::{info, warn};

use super::template::default_config_toml;

/// Environment variable that overrides the platform config location.
pub const CONFIG_ENV: &str = "LUMEN_CONFIG";

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation problems are logged and
/// the parsed config is returned as is; callers that need a valid config
/// run [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<LumenConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: LumenConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from [`default_config_path`].
///
/// If the file does not exist, writes the commented template there and
/// returns defaults.
pub fn load_default() -> Result<LumenConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(LumenConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Where the config lives: `$LUMEN_CONFIG` when set and non-empty, else
/// `lumen/config.toml` under the platform config directory
/// (`~/.config` on Linux, `~/Library/Application Support` on macOS).
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("lumen").join("config.toml"))
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is never overwritten; the call then does nothing.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_err = |e: std::io::Error| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut file = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            info!("config already exists at {}, leaving it", path.display());
            return Ok(());
        }
        Err(e) => return Err(write_err(e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(write_err)?;

    info!("created default config at {}", path.display());
    Ok(())
}
