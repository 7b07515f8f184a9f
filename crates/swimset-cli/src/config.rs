//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use swimset::{SwimsetError, config::AppConfig, group::GroupLabel};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Invalid configuration in {path}: {message}")]
    Validation { path: PathBuf, message: String },
}

impl From<ConfigError> for SwimsetError {
    fn from(err: ConfigError) -> Self {
        SwimsetError::Io(std::io::Error::other(err.to_string()))
    }
}

/// Places searched for a configuration file when none is given, in order.
fn discovery_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("swimset/config.toml")];

    match ProjectDirs::from("com", "swimset", "swimset") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }

    paths
}

/// Find and load the CLI configuration.
///
/// An explicit path must exist. Otherwise `swimset/config.toml` in the
/// working directory is tried, then `config.toml` in the platform config
/// directory, and the defaults are used when neither exists.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - Config file holds a value outside its allowed range
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, SwimsetError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let found = discovery_paths().into_iter().find(|candidate| {
        let exists = candidate.is_file();
        debug!(
            path = candidate.display().to_string(),
            exists = exists;
            "Checked configuration path"
        );
        exists
    });

    match found {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading discovered configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn load_config_file(path: &Path) -> Result<AppConfig, SwimsetError> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            SwimsetError::from(ConfigError::MissingFile(path.to_path_buf()))
        }
        _ => SwimsetError::Io(err),
    })?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config).map_err(|message| ConfigError::Validation {
        path: path.to_path_buf(),
        message,
    })?;

    Ok(config)
}

/// Reject values the parser would otherwise have to clamp.
fn validate(config: &AppConfig) -> Result<(), String> {
    let max_groups = config.parser().max_groups();
    if !(1..=GroupLabel::COUNT).contains(&max_groups) {
        return Err(format!(
            "parser.max_groups must be between 1 and {}, got {max_groups}",
            GroupLabel::COUNT
        ));
    }
    Ok(())
}
