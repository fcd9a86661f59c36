use crate::bridge::BridgeError;
use crate::control::types::OperationKind;
use crate::errors::AppctlError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControlError {
    #[error("{operation}: expected callback to be a function, got {found}")]
    InvalidCallbackType {
        operation: OperationKind,
        found: String,
    },

    #[error("{operation}: expected options to be an object, got {found}")]
    InvalidOptionsType {
        operation: OperationKind,
        found: String,
    },

    #[error("{operation}: expected application to be {expected}, got {found}")]
    InvalidApplicationType {
        operation: OperationKind,
        expected: &'static str,
        found: String,
    },

    #[error("{operation}: expected option '{option}' to be a boolean, got {found}")]
    InvalidOptionValueType {
        operation: OperationKind,
        option: &'static str,
        found: String,
    },

    #[error("Automation bridge failed: {message}")]
    BridgeExecutionFailure { message: String },

    #[error("{operation}: automation bridge returned no usable result")]
    EmptyBridgeResult { operation: OperationKind },
}

impl From<BridgeError> for ControlError {
    fn from(error: BridgeError) -> Self {
        ControlError::BridgeExecutionFailure {
            message: error.to_string(),
        }
    }
}

impl AppctlError for ControlError {
    fn error_code(&self) -> &'static str {
        match self {
            ControlError::InvalidCallbackType { .. } => "INVALID_CALLBACK_TYPE",
            ControlError::InvalidOptionsType { .. } => "INVALID_OPTIONS_TYPE",
            ControlError::InvalidApplicationType { .. } => "INVALID_APPLICATION_TYPE",
            ControlError::InvalidOptionValueType { .. } => "INVALID_OPTION_VALUE_TYPE",
            ControlError::BridgeExecutionFailure { .. } => "BRIDGE_EXECUTION_FAILURE",
            ControlError::EmptyBridgeResult { .. } => "EMPTY_BRIDGE_RESULT",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ControlError::InvalidCallbackType { .. }
                | ControlError::InvalidOptionsType { .. }
                | ControlError::InvalidApplicationType { .. }
                | ControlError::InvalidOptionValueType { .. }
        )
    }
}
