//! Per-operation validation of classified arguments.
//!
//! Every function here is pure: given the classified slots it either returns
//! canonical typed parameters or the argument-shape error to deliver.

use serde_json::{Map, Value};

use crate::control::args::{Positional, slot_type, value_type};
use crate::control::errors::ControlError;
use crate::control::types::{ListOptions, MinimizeOptions, OperationKind, Target};

/// Resolve the options slot to an object, or `None` for absent/`null`.
fn options_object(
    slot: Option<&Positional>,
    operation: OperationKind,
) -> Result<Option<&Map<String, Value>>, ControlError> {
    match slot {
        None | Some(Positional::Value(Value::Null)) => Ok(None),
        Some(Positional::Value(Value::Object(map))) => Ok(Some(map)),
        other => Err(ControlError::InvalidOptionsType {
            operation,
            found: slot_type(other),
        }),
    }
}

/// Read a recognized boolean option, falling back to `default` when unset.
///
/// An explicit `null` counts as unset.
fn bool_option(
    options: Option<&Map<String, Value>>,
    key: &'static str,
    default: bool,
    operation: OperationKind,
) -> Result<bool, ControlError> {
    match options.and_then(|map| map.get(key)) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(value)) => Ok(*value),
        Some(other) => Err(ControlError::InvalidOptionValueType {
            operation,
            option: key,
            found: value_type(other).to_string(),
        }),
    }
}

/// Validate `running_applications` options.
///
/// # Errors
///
/// `InvalidOptionsType` unless the slot is absent, `null` or an object;
/// `InvalidOptionValueType` if `background` is set to a non-boolean.
pub fn list_options(slot: Option<&Positional>) -> Result<ListOptions, ControlError> {
    let operation = OperationKind::ListRunning;
    let options = options_object(slot, operation)?;
    let background = bool_option(
        options,
        "background",
        ListOptions::default().background,
        operation,
    )?;
    Ok(ListOptions { background })
}

/// Validate `minimize` options.
///
/// # Errors
///
/// `InvalidOptionsType` unless the slot is absent, `null` or an object;
/// `InvalidOptionValueType` if `all` is set to a non-boolean.
pub fn minimize_options(slot: Option<&Positional>) -> Result<MinimizeOptions, ControlError> {
    let operation = OperationKind::Minimize;
    let options = options_object(slot, operation)?;
    let all = bool_option(options, "all", MinimizeOptions::default().all, operation)?;
    Ok(MinimizeOptions { all })
}

/// Validate a single application name.
///
/// # Errors
///
/// `InvalidApplicationType` unless the slot holds a string.
pub fn application(
    slot: Option<&Positional>,
    operation: OperationKind,
) -> Result<String, ControlError> {
    match slot {
        Some(Positional::Value(Value::String(name))) => Ok(name.clone()),
        other => Err(ControlError::InvalidApplicationType {
            operation,
            expected: "a string",
            found: slot_type(other),
        }),
    }
}

/// Validate a `quit` target: one name or an ordered list of names.
///
/// # Errors
///
/// `InvalidApplicationType` unless the slot holds a string or an array
/// whose members are all strings.
pub fn quit_target(slot: Option<&Positional>) -> Result<Target, ControlError> {
    const EXPECTED: &str = "a string or an array of strings";
    let operation = OperationKind::Quit;

    match slot {
        Some(Positional::Value(Value::String(name))) => Ok(Target::One(name.clone())),
        Some(Positional::Value(Value::Array(items))) => items
            .iter()
            .map(|item| match item {
                Value::String(name) => Ok(name.clone()),
                other => Err(ControlError::InvalidApplicationType {
                    operation,
                    expected: EXPECTED,
                    found: format!("array containing {}", value_type(other)),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Target::Many),
        other => Err(ControlError::InvalidApplicationType {
            operation,
            expected: EXPECTED,
            found: slot_type(other),
        }),
    }
}
