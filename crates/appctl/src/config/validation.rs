//! Configuration validation logic.

use crate::config::types::AppctlConfig;
use crate::errors::ConfigError;

/// Validate an AppctlConfig, returning an error if any values are invalid.
///
/// # Validation Rules
///
/// - Bridge program must not be empty
/// - Bridge language must not be empty
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the offending key.
pub fn validate_config(config: &AppctlConfig) -> Result<(), ConfigError> {
    if config.bridge.program.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "bridge.program must not be empty".to_string(),
        });
    }

    if config.bridge.language.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "bridge.language must not be empty".to_string(),
        });
    }

    Ok(())
}
