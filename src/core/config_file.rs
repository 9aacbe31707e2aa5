//! JSON persistence for [`GameConfig`].
//!
//! A missing file is not an error: callers get the defaults. A file that
//! exists but cannot be used is reported so the UI can tell the user why
//! their settings were dropped.

use std::fs;
use std::io;
use std::path::Path;

use super::config::{GameConfig, InvalidConfig};

/// Default file name used by the binary.
pub const DEFAULT_CONFIG_FILE: &str = "tcg-config.json";

/// Failures while reading or writing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("could not access config file: {0}")]
    Io(#[from] io::Error),

    #[error("config file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),

    #[error("config file is invalid: {0}")]
    Invalid(#[from] InvalidConfig),
}

/// Read and validate a config file.
pub fn load(path: impl AsRef<Path>) -> Result<GameConfig, ConfigFileError> {
    let text = fs::read_to_string(path)?;
    let config: GameConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Write a config file as pretty-printed JSON.
pub fn save(config: &GameConfig, path: impl AsRef<Path>) -> Result<(), ConfigFileError> {
    let text = serde_json::to_string_pretty(config)?;
    fs::write(path, text)?;
    Ok(())
}

/// Load a config file, falling back to defaults.
///
/// Returns the error that caused the fallback, if any. A missing file falls
/// back silently.
pub fn load_or_default(path: impl AsRef<Path>) -> (GameConfig, Option<ConfigFileError>) {
    let path = path.as_ref();
    match load(path) {
        Ok(config) => (config, None),
        Err(ConfigFileError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            (GameConfig::default(), None)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
            (GameConfig::default(), Some(err))
        }
    }
}
