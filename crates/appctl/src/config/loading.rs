//! Configuration loading.

use crate::config::types::AppctlConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse configuration from a TOML string and validate it.
///
/// Missing sections and keys fall back to their defaults.
///
/// # Errors
///
/// Returns `ConfigError::ConfigParseError` for malformed TOML and
/// `ConfigError::InvalidConfiguration` if validation fails.
pub fn from_toml_str(content: &str) -> Result<AppctlConfig, ConfigError> {
    let config: AppctlConfig =
        toml::from_str(content).map_err(|e| ConfigError::ConfigParseError {
            message: e.to_string(),
        })?;

    validate_config(&config)?;
    Ok(config)
}

/// Load configuration from a TOML file and validate it.
///
/// # Errors
///
/// Returns `ConfigError::ConfigNotFound` if the file does not exist, plus
/// every error [`from_toml_str`] can return.
pub fn load(path: &Path) -> Result<AppctlConfig, ConfigError> {
    debug!(event = "core.config.load_started", path = %path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            }
        } else {
            ConfigError::IoError { source: e }
        }
    })?;

    let config = from_toml_str(&content).map_err(|e| match e {
        ConfigError::ConfigParseError { message } => ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), message),
        },
        other => other,
    })?;

    debug!(
        event = "core.config.load_completed",
        path = %path.display(),
        program = config.bridge.program,
        timeout_ms = config.bridge.timeout_ms
    );

    Ok(config)
}
