//! Conversion of raw bridge values into operation results.

use crate::bridge::BridgeValue;
use crate::control::errors::ControlError;
use crate::control::types::OperationKind;

/// Unwrap the one-element list wrapper around running process names.
///
/// A flat list of names is accepted as-is. Order is kept as reported.
///
/// # Errors
///
/// - `BridgeExecutionFailure` if the bridge produced no value at all, or a
///   value that is not a list of names.
/// - `EmptyBridgeResult` if the wrapper is present but holds nothing.
pub fn running_applications(value: BridgeValue) -> Result<Vec<String>, ControlError> {
    let items = match value {
        BridgeValue::Empty => {
            return Err(ControlError::BridgeExecutionFailure {
                message: "running_applications: bridge returned no value".to_string(),
            });
        }
        BridgeValue::Text(text) => {
            return Err(ControlError::BridgeExecutionFailure {
                message: format!(
                    "running_applications: expected a list of names, got text '{}'",
                    text
                ),
            });
        }
        BridgeValue::List(items) => items,
    };

    if items.is_empty() {
        return Err(ControlError::EmptyBridgeResult {
            operation: OperationKind::ListRunning,
        });
    }

    let names = match <[BridgeValue; 1]>::try_from(items) {
        Ok([BridgeValue::List(inner)]) => inner,
        Ok([single]) => vec![single],
        Err(flat) => flat,
    };

    names
        .into_iter()
        .map(|item| match item {
            BridgeValue::Text(name) => Ok(name),
            other => Err(ControlError::BridgeExecutionFailure {
                message: format!(
                    "running_applications: expected process names to be text, got {:?}",
                    other
                ),
            }),
        })
        .collect()
}

/// Exactly the text `true` is `true`; every other value is `false`.
pub fn is_open(value: BridgeValue) -> Result<bool, ControlError> {
    Ok(matches!(value, BridgeValue::Text(ref text) if text == "true"))
}

/// Discard the payload of unit-result operations.
pub fn discard(_value: BridgeValue) -> Result<(), ControlError> {
    Ok(())
}
