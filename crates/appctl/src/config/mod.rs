//! # Configuration
//!
//! TOML configuration for the automation bridge.
//!
//! Configuration is only ever read from a source the caller names
//! explicitly: an in-memory TOML string or a file path. There is no
//! discovery of user or project config files and no environment lookup.
//!
//! ## Usage Example
//!
//! ```toml
//! [bridge]
//! program = "osascript"
//! language = "JavaScript"
//! timeout_ms = 5000
//! ```
//!
//! ```rust,no_run
//! use appctl::config::AppctlConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppctlConfig::load(std::path::Path::new("appctl.toml"))?;
//!     println!("{}", config.bridge.program);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AppctlConfig, BridgeConfig};
pub use validation::validate_config;

impl AppctlConfig {
    /// Parse and validate configuration from a TOML string.
    ///
    /// See [`loading::from_toml_str`] for details.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::errors::ConfigError> {
        loading::from_toml_str(content)
    }

    /// Load and validate configuration from a TOML file.
    ///
    /// See [`loading::load`] for details.
    pub fn load(path: &std::path::Path) -> Result<Self, crate::errors::ConfigError> {
        loading::load(path)
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
