//! String quoting utilities for JavaScript for Automation scripts.
//!
//! JSON string and array literals are valid JavaScript literals, so values
//! are serialized with `serde_json` rather than hand-escaped.

use serde_json::Value;

/// Quote a string as a JavaScript string literal.
pub fn js_string_literal(s: &str) -> String {
    Value::String(s.to_owned()).to_string()
}

/// Quote a list of strings as a JavaScript array literal, preserving order.
pub fn js_array_literal(items: &[String]) -> String {
    Value::from(items.to_vec()).to_string()
}
