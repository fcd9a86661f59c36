//! Default implementations for configuration types.
//!
//! Helper functions here are used by serde `#[serde(default = "...")]`
//! attributes as well as the `Default` impls.

use crate::config::types::BridgeConfig;

/// Returns the default bridge executable (`osascript`).
pub fn default_program() -> String {
    "osascript".to_string()
}

/// Returns the default scripting language (`JavaScript`).
///
/// Every script the library builds is JavaScript for Automation, so this
/// only needs changing for wrappers that accept a different flag value.
pub fn default_language() -> String {
    "JavaScript".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            language: default_language(),
            timeout_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bridge_config_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.program, "osascript");
        assert_eq!(config.language, "JavaScript");
        assert_eq!(config.timeout_ms, 0);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_bridge_config_timeout() {
        let config = BridgeConfig {
            timeout_ms: 2500,
            ..BridgeConfig::default()
        };
        assert_eq!(config.timeout(), Some(std::time::Duration::from_millis(2500)));
    }
}
