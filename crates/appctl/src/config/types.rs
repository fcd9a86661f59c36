//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [bridge]
//! program = "osascript"
//! language = "JavaScript"
//! timeout_ms = 0
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppctlConfig {
    /// Automation bridge settings
    #[serde(default)]
    pub bridge: BridgeConfig,
}

/// Settings for the `osascript` automation bridge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Executable name or path, resolved through `PATH` when relative.
    #[serde(default = "super::defaults::default_program")]
    pub program: String,

    /// Scripting language passed to `osascript -l`.
    #[serde(default = "super::defaults::default_language")]
    pub language: String,

    /// Per-script timeout in milliseconds. `0` disables the timeout.
    #[serde(default)]
    pub timeout_ms: u64,
}

impl BridgeConfig {
    /// The per-script timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}
