//! Config file loading.

use std::path::Path;

use crate::error::GeminiError;

use super::types::ConnectorConfig;

/// Read a config file from disk and deserialize it.
///
/// # Errors
/// Returns `GeminiError::ConfigError` if the file cannot be read or parsed.
pub fn read_config(path: &Path) -> Result<ConnectorConfig, GeminiError> {
    let contents = read_config_text(path)?;
    toml::from_str(&contents).map_err(|e| {
        GeminiError::ConfigError(format!(
            "failed to parse config file '{}': {e}",
            path.display()
        ))
    })
}

/// Read raw TOML config text from disk.
///
/// # Errors
/// Returns `GeminiError::ConfigError` if the file cannot be read.
pub fn read_config_text(path: &Path) -> Result<String, GeminiError> {
    std::fs::read_to_string(path).map_err(|e| {
        GeminiError::ConfigError(format!(
            "failed to read config file '{}': {e}",
            path.display()
        ))
    })
}
