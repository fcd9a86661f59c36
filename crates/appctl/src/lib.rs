//! appctl: query and control running macOS applications
//!
//! Operations are turned into JavaScript for Automation scripts and run
//! through an [`AutomationBridge`], by default `osascript`.
//!
//! # Main Entry Points
//!
//! - [`AppControl`] - list, check, quit, minimize and focus applications
//! - [`bridge`] - the bridge boundary and the `osascript` implementation
//! - [`config`] - bridge configuration

pub mod bridge;
pub mod config;
pub mod control;
pub mod errors;
pub mod escape;
pub mod logging;

// Re-export commonly used types at crate root for convenience
pub use bridge::{AutomationBridge, BridgeError, BridgeValue, OsascriptBridge, Script};
pub use config::{AppctlConfig, BridgeConfig};
pub use control::{
    AppControl, Arg, Callback, ControlError, Deferred, ListOptions, MinimizeOptions,
    OperationKind, OperationRequest, Outcome, Target,
};
pub use errors::{AppctlError, ConfigError};

// Re-export logging initialization
pub use logging::init_logging;
