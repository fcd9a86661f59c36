//! Positional call arguments and their one-time shape classification.
//!
//! Operations accept loosely-typed positional arguments so that callers
//! bridging from dynamic sources (JSON-RPC, scripting hosts) can forward
//! them unchanged. Each call is classified exactly once at entry into a
//! canonical `{target, options, callback}` triple; validation rules then run
//! against that triple only.

use serde_json::Value;
use std::fmt;
use tracing::debug;

use crate::control::errors::ControlError;
use crate::control::types::OperationKind;

/// Completion callback receiving an operation's final outcome.
pub type Callback<T> = Box<dyn FnOnce(Result<T, ControlError>) + Send + 'static>;

/// One positional argument: a data value or a completion callback.
pub enum Arg<T> {
    Value(Value),
    Callback(Callback<T>),
}

impl<T> Arg<T> {
    /// Wrap a closure as a completion callback argument.
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(Result<T, ControlError>) + Send + 'static,
    {
        Arg::Callback(Box::new(f))
    }

    /// Runtime type name, in the vocabulary used by error messages.
    pub fn runtime_type(&self) -> String {
        match self {
            Arg::Value(value) => value_type(value).to_string(),
            Arg::Callback(_) => "function".to_string(),
        }
    }
}

impl<T> fmt::Debug for Arg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Arg::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl<T> From<Value> for Arg<T> {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl<T> From<&str> for Arg<T> {
    fn from(value: &str) -> Self {
        Arg::Value(Value::from(value))
    }
}

impl<T> From<String> for Arg<T> {
    fn from(value: String) -> Self {
        Arg::Value(Value::from(value))
    }
}

impl<T> From<bool> for Arg<T> {
    fn from(value: bool) -> Self {
        Arg::Value(Value::from(value))
    }
}

impl<T> From<Vec<&str>> for Arg<T> {
    fn from(values: Vec<&str>) -> Self {
        Arg::Value(Value::from(values))
    }
}

impl<T> From<Vec<String>> for Arg<T> {
    fn from(values: Vec<String>) -> Self {
        Arg::Value(Value::from(values))
    }
}

/// Runtime type name of a data value.
pub fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A non-callback slot after classification.
///
/// Callbacks found in a data position are kept only as a type marker so
/// validation can report them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Positional {
    Value(Value),
    Function,
}

impl Positional {
    fn from_arg<T>(arg: Arg<T>) -> Self {
        match arg {
            Arg::Value(value) => Positional::Value(value),
            Arg::Callback(_) => Positional::Function,
        }
    }
}

/// Runtime type of an optional slot; an absent slot is `undefined`.
pub(crate) fn slot_type(slot: Option<&Positional>) -> String {
    match slot {
        None => "undefined".to_string(),
        Some(Positional::Function) => "function".to_string(),
        Some(Positional::Value(value)) => value_type(value).to_string(),
    }
}

/// Positional layout accepted by an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CallShape {
    /// `(options?, callback?)`
    Options,
    /// `(application, callback?)`
    Target,
    /// `(application, options?, callback?)`
    TargetOptions,
}

impl CallShape {
    fn takes_target(self) -> bool {
        matches!(self, CallShape::Target | CallShape::TargetOptions)
    }

    fn takes_options(self) -> bool {
        matches!(self, CallShape::Options | CallShape::TargetOptions)
    }
}

/// Canonical form of a call.
pub(crate) struct Classified<T> {
    pub target: Option<Positional>,
    pub options: Option<Positional>,
    pub callback: Option<Callback<T>>,
}

/// Split positional arguments into target, options and callback.
///
/// A callback in the options position with nothing after it is the
/// completion callback, and options take their defaults. Arguments past the
/// last recognized position are ignored.
///
/// # Errors
///
/// Returns `ControlError::InvalidCallbackType` if the callback position
/// holds a data value (including `null`). This is the only error raised
/// here; every other shape problem is left to validation.
pub(crate) fn classify<T>(
    args: Vec<Arg<T>>,
    shape: CallShape,
    operation: OperationKind,
) -> Result<Classified<T>, ControlError> {
    let mut slots = args.into_iter();

    let target = if shape.takes_target() {
        slots.next()
    } else {
        None
    };

    let (options, callback) = if shape.takes_options() {
        match (slots.next(), slots.next()) {
            (Some(Arg::Callback(callback)), None) => (None, Some(Arg::Callback(callback))),
            (options, callback) => (options, callback),
        }
    } else {
        (None, slots.next())
    };

    let ignored = slots.count();
    if ignored > 0 {
        debug!(
            event = "core.appctl.extra_arguments_ignored",
            operation = %operation,
            ignored
        );
    }

    let callback = match callback {
        None => None,
        Some(Arg::Callback(callback)) => Some(callback),
        Some(Arg::Value(value)) => {
            return Err(ControlError::InvalidCallbackType {
                operation,
                found: value_type(&value).to_string(),
            });
        }
    };

    Ok(Classified {
        target: target.map(Positional::from_arg),
        options: options.map(Positional::from_arg),
        callback,
    })
}
