//! JavaScript for Automation script builders.
//!
//! Builders are pure and never validate; names are inserted as JSON string
//! literals so they cannot terminate the surrounding literal.

use crate::bridge::Script;
use crate::control::types::{OperationKind, OperationOptions, OperationRequest, Target};
use crate::escape::{js_array_literal, js_string_literal};

/// Names of processes whose background-only flag matches, wrapped in a
/// one-element array.
const LIST_RUNNING_SCRIPT: &str = r#"JSON.stringify([
    Application("System Events").processes.whose({ backgroundOnly: { _equals: {background} } }).name()
])"#;

const IS_OPEN_SCRIPT: &str =
    r#"Application("System Events").processes.name().includes({app})"#;

const QUIT_SCRIPT: &str = r#"Application({app}).quit()"#;

/// Quits each listed application in order within a single script.
const QUIT_MANY_SCRIPT: &str = r#"{apps}.forEach(function (name) {
    Application(name).quit();
})"#;

const MINIMIZE_ALL_SCRIPT: &str = r#"Application({app}).windows().forEach(function (window) {
    window.miniaturized = true;
})"#;

const MINIMIZE_FRONT_SCRIPT: &str = r#"Application({app}).windows[0].miniaturized = true"#;

/// Hides the application through System Events. Used when the application
/// rejects `miniaturized`.
const HIDE_SCRIPT: &str =
    r#"Application("System Events").processes.byName({app}).visible = false"#;

const FOCUS_SCRIPT: &str = r#"Application({app}).activate()"#;

pub fn list_running(background: bool) -> Script {
    Script::new(LIST_RUNNING_SCRIPT.replace("{background}", &background.to_string()))
}

pub fn is_open(application: &str) -> Script {
    Script::new(IS_OPEN_SCRIPT.replace("{app}", &js_string_literal(application)))
}

pub fn quit(target: &Target) -> Script {
    match target {
        Target::One(application) => {
            Script::new(QUIT_SCRIPT.replace("{app}", &js_string_literal(application)))
        }
        Target::Many(applications) => {
            Script::new(QUIT_MANY_SCRIPT.replace("{apps}", &js_array_literal(applications)))
        }
        Target::None => Script::new(QUIT_MANY_SCRIPT.replace("{apps}", "[]")),
    }
}

pub fn minimize(application: &str, all: bool) -> Script {
    let template = if all {
        MINIMIZE_ALL_SCRIPT
    } else {
        MINIMIZE_FRONT_SCRIPT
    };
    Script::new(template.replace("{app}", &js_string_literal(application)))
}

pub fn hide(application: &str) -> Script {
    Script::new(HIDE_SCRIPT.replace("{app}", &js_string_literal(application)))
}

pub fn focus(application: &str) -> Script {
    Script::new(FOCUS_SCRIPT.replace("{app}", &js_string_literal(application)))
}

/// Primary script for a validated request.
pub fn for_request(request: &OperationRequest) -> Script {
    let application = match request.target() {
        Target::One(name) => name.as_str(),
        Target::Many(_) | Target::None => "",
    };

    match (request.kind(), request.options()) {
        (OperationKind::ListRunning, OperationOptions::List(options)) => {
            list_running(options.background)
        }
        (OperationKind::ListRunning, _) => list_running(false),
        (OperationKind::IsOpen, _) => is_open(application),
        (OperationKind::Quit, _) => quit(request.target()),
        (OperationKind::Minimize, OperationOptions::Minimize(options)) => {
            minimize(application, options.all)
        }
        (OperationKind::Minimize, _) => minimize(application, true),
        (OperationKind::Focus, _) => focus(application),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::types::{ListOptions, MinimizeOptions};

    #[test]
    fn test_list_running_background_values_differ() {
        let foreground = list_running(false);
        let background = list_running(true);

        assert_ne!(foreground, background);
        assert!(foreground.as_str().contains("backgroundOnly: { _equals: false }"));
        assert!(background.as_str().contains("backgroundOnly: { _equals: true }"));
        assert!(foreground.as_str().starts_with("JSON.stringify(["));
    }

    #[test]
    fn test_is_open_script() {
        let script = is_open("Finder");
        assert_eq!(
            script.as_str(),
            r#"Application("System Events").processes.name().includes("Finder")"#
        );
    }

    #[test]
    fn test_quit_single() {
        assert_eq!(
            quit(&Target::One("Safari".to_string())).as_str(),
            r#"Application("Safari").quit()"#
        );
    }

    #[test]
    fn test_quit_many_iterates_in_order() {
        let script = quit(&Target::Many(vec!["AppA".to_string(), "AppB".to_string()]));
        assert!(script.as_str().starts_with(r#"["AppA","AppB"].forEach("#));
        assert!(script.as_str().contains("Application(name).quit();"));
    }

    #[test]
    fn test_minimize_all_and_front() {
        let all = minimize("Notes", true);
        assert!(all.as_str().contains(r#"Application("Notes").windows().forEach("#));
        assert!(all.as_str().contains("window.miniaturized = true;"));

        let front = minimize("Notes", false);
        assert_eq!(
            front.as_str(),
            r#"Application("Notes").windows[0].miniaturized = true"#
        );
    }

    #[test]
    fn test_hide_targets_visible_attribute() {
        let script = hide("Notes");
        assert_eq!(
            script.as_str(),
            r#"Application("System Events").processes.byName("Notes").visible = false"#
        );
    }

    #[test]
    fn test_focus_script() {
        assert_eq!(focus("Finder").as_str(), r#"Application("Finder").activate()"#);
    }

    #[test]
    fn test_names_with_quotes_stay_inside_literal() {
        let script = focus(r#"Evil") ; Application("Finder"#);
        assert_eq!(
            script.as_str(),
            r#"Application("Evil\") ; Application(\"Finder").activate()"#
        );
    }

    #[test]
    fn test_for_request_matches_builders() {
        assert_eq!(
            for_request(&OperationRequest::list_running(ListOptions { background: true })),
            list_running(true)
        );
        assert_eq!(
            for_request(&OperationRequest::minimize(
                "Notes",
                MinimizeOptions { all: false }
            )),
            minimize("Notes", false)
        );
        assert_eq!(
            for_request(&OperationRequest::quit(Target::One("Mail".to_string()))),
            quit(&Target::One("Mail".to_string()))
        );
        assert_eq!(for_request(&OperationRequest::is_open("Mail")), is_open("Mail"));
        assert_eq!(for_request(&OperationRequest::focus("Mail")), focus("Mail"));
    }
}
