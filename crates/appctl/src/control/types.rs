use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bridge::Script;
use crate::control::script;

/// The five operations the controller exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    ListRunning,
    IsOpen,
    Quit,
    Minimize,
    Focus,
}

impl OperationKind {
    /// Public operation name, as used in error messages and log events.
    pub fn name(&self) -> &'static str {
        match self {
            OperationKind::ListRunning => "running_applications",
            OperationKind::IsOpen => "is_open",
            OperationKind::Quit => "quit",
            OperationKind::Minimize => "minimize",
            OperationKind::Focus => "focus",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application(s) an operation acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// ListRunning acts on the whole system.
    None,
    One(String),
    /// Only accepted by Quit.
    Many(Vec<String>),
}

/// Options recognized by `running_applications`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Include background-only processes instead of regular applications.
    pub background: bool,
}

/// Options recognized by `minimize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimizeOptions {
    /// Minimize every window rather than only the frontmost one.
    pub all: bool,
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self { all: true }
    }
}

/// Per-operation options after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationOptions {
    None,
    List(ListOptions),
    Minimize(MinimizeOptions),
}

/// A fully validated request, independent of how its result is delivered.
///
/// Fields are private so a request can only be built in a shape its
/// operation accepts. Deserialization checks the same shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RequestFields")]
pub struct OperationRequest {
    kind: OperationKind,
    target: Target,
    options: OperationOptions,
}

/// Unchecked wire form of an [`OperationRequest`].
#[derive(Deserialize)]
struct RequestFields {
    kind: OperationKind,
    target: Target,
    options: OperationOptions,
}

impl TryFrom<RequestFields> for OperationRequest {
    type Error = String;

    fn try_from(fields: RequestFields) -> Result<Self, Self::Error> {
        let RequestFields {
            kind,
            target,
            options,
        } = fields;

        let valid = match kind {
            OperationKind::ListRunning => {
                matches!(target, Target::None) && matches!(options, OperationOptions::List(_))
            }
            OperationKind::IsOpen | OperationKind::Focus => {
                matches!(target, Target::One(_)) && matches!(options, OperationOptions::None)
            }
            OperationKind::Quit => {
                matches!(target, Target::One(_) | Target::Many(_))
                    && matches!(options, OperationOptions::None)
            }
            OperationKind::Minimize => {
                matches!(target, Target::One(_))
                    && matches!(options, OperationOptions::Minimize(_))
            }
        };

        if !valid {
            return Err(format!(
                "{} does not accept target {:?} with options {:?}",
                kind, target, options
            ));
        }

        Ok(Self {
            kind,
            target,
            options,
        })
    }
}

impl OperationRequest {
    pub fn list_running(options: ListOptions) -> Self {
        Self {
            kind: OperationKind::ListRunning,
            target: Target::None,
            options: OperationOptions::List(options),
        }
    }

    pub fn is_open(application: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::IsOpen,
            target: Target::One(application.into()),
            options: OperationOptions::None,
        }
    }

    /// Quit a single application or an ordered list of them.
    pub fn quit(target: Target) -> Self {
        Self {
            kind: OperationKind::Quit,
            target,
            options: OperationOptions::None,
        }
    }

    pub fn minimize(application: impl Into<String>, options: MinimizeOptions) -> Self {
        Self {
            kind: OperationKind::Minimize,
            target: Target::One(application.into()),
            options: OperationOptions::Minimize(options),
        }
    }

    pub fn focus(application: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::Focus,
            target: Target::One(application.into()),
            options: OperationOptions::None,
        }
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn options(&self) -> OperationOptions {
        self.options
    }

    /// The primary script this request dispatches.
    pub fn script(&self) -> Script {
        script::for_request(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_kind_names() {
        assert_eq!(OperationKind::ListRunning.to_string(), "running_applications");
        assert_eq!(OperationKind::IsOpen.to_string(), "is_open");
        assert_eq!(OperationKind::Quit.to_string(), "quit");
        assert_eq!(OperationKind::Minimize.to_string(), "minimize");
        assert_eq!(OperationKind::Focus.to_string(), "focus");
    }

    #[test]
    fn test_option_defaults() {
        assert!(!ListOptions::default().background);
        assert!(MinimizeOptions::default().all);
    }

    #[test]
    fn test_request_constructors() {
        let request = OperationRequest::minimize("Safari", MinimizeOptions { all: false });
        assert_eq!(request.kind(), OperationKind::Minimize);
        assert_eq!(request.target(), &Target::One("Safari".to_string()));
        assert_eq!(
            request.options(),
            OperationOptions::Minimize(MinimizeOptions { all: false })
        );

        let request = OperationRequest::quit(Target::Many(vec!["A".into(), "B".into()]));
        assert_eq!(request.kind(), OperationKind::Quit);
        assert_eq!(request.options(), OperationOptions::None);
    }

    #[test]
    fn test_request_serializes_kind_in_snake_case() {
        let json = serde_json::to_value(OperationRequest::focus("Finder")).unwrap();
        assert_eq!(json["kind"], "focus");
    }

    #[test]
    fn test_request_deserializes_valid_shapes() {
        for request in [
            OperationRequest::list_running(ListOptions { background: true }),
            OperationRequest::is_open("Finder"),
            OperationRequest::quit(Target::Many(vec!["A".into(), "B".into()])),
            OperationRequest::minimize("Notes", MinimizeOptions { all: false }),
            OperationRequest::focus("Mail"),
        ] {
            let json = serde_json::to_value(&request).unwrap();
            let parsed: OperationRequest = serde_json::from_value(json).unwrap();
            assert_eq!(parsed, request);
        }
    }

    #[test]
    fn test_request_deserialization_rejects_mismatched_shapes() {
        let rejected = [
            serde_json::json!({"kind": "is_open", "target": "None", "options": "None"}),
            serde_json::json!({"kind": "focus", "target": {"Many": ["A"]}, "options": "None"}),
            serde_json::json!({"kind": "list_running", "target": {"One": "A"}, "options": {"List": {"background": false}}}),
            serde_json::json!({"kind": "minimize", "target": {"One": "A"}, "options": "None"}),
            serde_json::json!({"kind": "quit", "target": "None", "options": "None"}),
        ];

        for json in rejected {
            let result = serde_json::from_value::<OperationRequest>(json.clone());
            assert!(result.is_err(), "accepted {}", json);
        }
    }
}
