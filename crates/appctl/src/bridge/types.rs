use serde_json::Value;
use std::fmt;

/// A script ready to hand to the automation bridge.
///
/// Built once per call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script(String);

impl Script {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw value reported by the automation bridge on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeValue {
    /// The script produced no value.
    Empty,
    Text(String),
    List(Vec<BridgeValue>),
}

impl BridgeValue {
    /// Interpret the stdout of an `osascript` run.
    ///
    /// Empty output is [`BridgeValue::Empty`]. Output that parses as JSON is
    /// mapped structurally (booleans and numbers become their text form,
    /// `null` is empty). Anything else is kept verbatim as text, which is how
    /// `osascript` prints bare strings.
    pub fn from_osascript_output(stdout: &str) -> Self {
        let trimmed = stdout.trim();
        if trimmed.is_empty() {
            return BridgeValue::Empty;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => Self::from_json(value),
            Err(_) => BridgeValue::Text(trimmed.to_string()),
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => BridgeValue::Empty,
            Value::Bool(b) => BridgeValue::Text(b.to_string()),
            Value::Number(n) => BridgeValue::Text(n.to_string()),
            Value::String(s) => BridgeValue::Text(s),
            Value::Array(items) => {
                BridgeValue::List(items.into_iter().map(Self::from_json).collect())
            }
            object @ Value::Object(_) => BridgeValue::Text(object.to_string()),
        }
    }

    /// Build a flat list of text values.
    pub fn text_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BridgeValue::List(
            items
                .into_iter()
                .map(|s| BridgeValue::Text(s.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output() {
        assert_eq!(BridgeValue::from_osascript_output(""), BridgeValue::Empty);
        assert_eq!(BridgeValue::from_osascript_output(" \n"), BridgeValue::Empty);
    }

    #[test]
    fn test_boolean_output_is_text() {
        assert_eq!(
            BridgeValue::from_osascript_output("true\n"),
            BridgeValue::Text("true".to_string())
        );
        assert_eq!(
            BridgeValue::from_osascript_output("false"),
            BridgeValue::Text("false".to_string())
        );
    }

    #[test]
    fn test_bare_string_output_is_kept_verbatim() {
        assert_eq!(
            BridgeValue::from_osascript_output("Finder, Safari\n"),
            BridgeValue::Text("Finder, Safari".to_string())
        );
    }

    #[test]
    fn test_nested_json_array_output() {
        let value = BridgeValue::from_osascript_output("[[\"Finder\",\"Dock\"]]\n");
        assert_eq!(
            value,
            BridgeValue::List(vec![BridgeValue::text_list(["Finder", "Dock"])])
        );
    }

    #[test]
    fn test_null_output_is_empty() {
        assert_eq!(BridgeValue::from_osascript_output("null"), BridgeValue::Empty);
    }

    #[test]
    fn test_script_display() {
        let script = Script::new("Application(\"Finder\").activate()");
        assert_eq!(script.to_string(), "Application(\"Finder\").activate()");
        assert_eq!(script.as_str(), script.clone().into_string());
    }
}
