use crate::types::Config;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{axis} must be at least 2, got {value}")]
    InvalidDimension { axis: &'static str, value: u32 },
    #[error("starCount must be at least 1")]
    NoStars,
    #[error("targetFps must be at least 1")]
    InvalidFrameRate,
}

/// Returns the config file path: `<config dir>/starfield/config.json`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("starfield").join("config.json")
}

/// Load the config from disk, returning defaults if the file is missing.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load and validate the config at `path`. A missing or unreadable file
/// yields defaults; values that parse but make no sense are an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        info!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let config = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "ignoring malformed config");
            Config::default()
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read config");
            Config::default()
        }
    };
    validate(&config)?;
    info!(?config, "loaded config");
    Ok(config)
}

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.width < 2 {
        return Err(ConfigError::InvalidDimension {
            axis: "width",
            value: config.width,
        });
    }
    if config.height < 2 {
        return Err(ConfigError::InvalidDimension {
            axis: "height",
            value: config.height,
        });
    }
    if config.star_count == 0 {
        return Err(ConfigError::NoStars);
    }
    if config.target_fps == 0 {
        return Err(ConfigError::InvalidFrameRate);
    }
    Ok(())
}
