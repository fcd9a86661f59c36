use crate::errors::AppctlError;

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Automation bridge '{program}' is not available: {message}")]
    Unavailable { program: String, message: String },

    #[error("Failed to launch automation bridge: {message}")]
    LaunchFailed { message: String },

    #[error("Script failed with error: {stderr}")]
    ScriptFailed { stderr: String },

    #[error("Script did not finish within {timeout_ms}ms")]
    TimedOut { timeout_ms: u64 },

    #[error("Automation bridge dropped the script without reporting a result")]
    Dropped,
}

impl AppctlError for BridgeError {
    fn error_code(&self) -> &'static str {
        match self {
            BridgeError::Unavailable { .. } => "BRIDGE_UNAVAILABLE",
            BridgeError::LaunchFailed { .. } => "BRIDGE_LAUNCH_FAILED",
            BridgeError::ScriptFailed { .. } => "BRIDGE_SCRIPT_FAILED",
            BridgeError::TimedOut { .. } => "BRIDGE_TIMED_OUT",
            BridgeError::Dropped => "BRIDGE_DROPPED",
        }
    }
}
