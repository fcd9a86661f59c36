//! The automation bridge boundary.
//!
//! A bridge accepts a script and reports either a raw [`BridgeValue`] or a
//! [`BridgeError`]. [`OsascriptBridge`] talks to the real `osascript`
//! binary; [`testing::ScriptedBridge`] replays canned results.

pub mod errors;
pub mod osascript;
pub mod testing;
pub mod traits;
pub mod types;

pub use errors::BridgeError;
pub use osascript::OsascriptBridge;
pub use traits::{AutomationBridge, BridgeCallback, BridgeResult};
pub use types::{BridgeValue, Script};
