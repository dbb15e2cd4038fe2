//! Configuration discovery for the driver.
//!
//! The renderer settings live in an optional TOML file. The driver looks in
//! three places before falling back to built-in defaults, so a checked-in
//! `wafviz/config.toml` next to the diagrams wins over a per-user file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use wafviz::{WafvizError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for WafvizError {
    fn from(err: ConfigError) -> Self {
        WafvizError::Config(err.to_string())
    }
}

/// Resolve the renderer configuration.
///
/// Checked in order: the `--config` path if one was given (missing file is
/// an error), then `wafviz/config.toml` in the working directory, then
/// `config.toml` under the platform config directory. When none exists the
/// defaults apply.
///
/// # Errors
///
/// Returns [`WafvizError::Config`] when an explicit path does not exist or
/// when a discovered file fails to parse as TOML.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, WafvizError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Using configuration from --config");
        return load_config_file(path);
    }

    let local_config = Path::new("wafviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Using project-local configuration");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "wafviz", "wafviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Using per-user configuration");
            return load_config_file(&system_config);
        }

        debug!(path = system_config.display().to_string(); "No per-user configuration file");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using defaults");
    Ok(AppConfig::default())
}

/// Read and parse one TOML configuration file.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, WafvizError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
