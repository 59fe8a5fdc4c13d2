//! Locating and reading the CLI configuration file.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among `arbor/config.toml` (relative to the working directory) and
//! `config.toml` in the platform config directory is used; when neither
//! exists the built-in defaults apply.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use arbor::{ArborError, config::AppConfig};

const LOCAL_CONFIG: &str = "arbor/config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid configuration in {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ArborError {
    fn from(err: ConfigError) -> Self {
        ArborError::Config(err.to_string())
    }
}

/// Loads the configuration for this run.
///
/// # Errors
///
/// [`ConfigError::MissingFile`] when `explicit_path` does not exist,
/// [`ConfigError::Parse`] when the chosen file is not valid TOML for the
/// configuration, and [`ConfigError::Invalid`] when a layout parameter is out
/// of range.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArborError> {
    let path = match explicit_path {
        Some(path) => {
            let path = path.as_ref().to_path_buf();
            if !path.exists() {
                return Err(ConfigError::MissingFile(path).into());
            }
            path
        }
        None => match discover() {
            Some(path) => path,
            None => {
                debug!("No configuration file found, using defaults");
                return Ok(AppConfig::default());
            }
        },
    };

    info!(path = path.display().to_string(); "Loading configuration");
    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        message: err.to_string(),
    })?;
    config
        .validate()
        .map_err(|message| ConfigError::Invalid { path, message })?;

    Ok(config)
}

/// First existing implicit configuration file.
fn discover() -> Option<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "arbor", "arbor") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }

    candidates.into_iter().find(|candidate| {
        let found = candidate.exists();
        debug!(path = candidate.display().to_string(), found = found; "Checked configuration path");
        found
    })
}
