//! Hand scripts to the bridge and route outcomes to the delivery.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::bridge::{AutomationBridge, BridgeValue, Script};
use crate::control::delivery::Delivery;
use crate::control::errors::ControlError;
use crate::control::normalize;
use crate::control::types::OperationKind;
use crate::errors::AppctlError;

/// Dispatch a script once and deliver the normalized outcome.
///
/// Bridge failures are delivered unchanged as `BridgeExecutionFailure`.
pub(crate) fn dispatch<T, N>(
    bridge: &Arc<dyn AutomationBridge>,
    operation: OperationKind,
    script: Script,
    normalize: N,
    delivery: Delivery<T>,
) where
    T: Send + 'static,
    N: FnOnce(BridgeValue) -> Result<T, ControlError> + Send + 'static,
{
    debug!(
        event = "core.appctl.bridge_dispatch_started",
        operation = %operation,
        bridge = bridge.name(),
        script_len = script.as_str().len()
    );

    bridge.execute(
        script,
        Box::new(move |result| {
            let outcome = match result {
                Ok(value) => normalize(value),
                Err(error) => {
                    warn!(
                        event = "core.appctl.bridge_dispatch_failed",
                        operation = %operation,
                        error = %error
                    );
                    Err(ControlError::from(error))
                }
            };

            match &outcome {
                Ok(_) => info!(
                    event = "core.appctl.operation_completed",
                    operation = %operation
                ),
                Err(error) => warn!(
                    event = "core.appctl.operation_failed",
                    operation = %operation,
                    error_code = error.error_code(),
                    error = %error
                ),
            }

            delivery.deliver(outcome);
        }),
    );
}

/// Dispatch the minimize script, falling back to hiding the application if
/// the bridge rejects it.
///
/// Exactly one fallback dispatch happens per primary failure, and its
/// outcome is final. The primary failure is logged and otherwise dropped.
pub(crate) fn dispatch_minimize(
    bridge: &Arc<dyn AutomationBridge>,
    application: String,
    primary: Script,
    delivery: Delivery<()>,
) {
    let operation = OperationKind::Minimize;
    let retry_bridge = Arc::clone(bridge);

    debug!(
        event = "core.appctl.bridge_dispatch_started",
        operation = %operation,
        bridge = bridge.name(),
        script_len = primary.as_str().len()
    );

    bridge.execute(
        primary,
        Box::new(move |result| match result {
            Ok(_) => {
                info!(
                    event = "core.appctl.operation_completed",
                    operation = %operation,
                    application = %application
                );
                delivery.deliver(Ok(()));
            }
            Err(error) => {
                info!(
                    event = "core.appctl.minimize_fallback_started",
                    application = %application,
                    primary_error = %error
                );
                let fallback = crate::control::script::hide(&application);
                dispatch(
                    &retry_bridge,
                    operation,
                    fallback,
                    normalize::discard,
                    delivery,
                );
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::BridgeError;
    use crate::bridge::testing::ScriptedBridge;
    use crate::control::script;

    fn script_failed(stderr: &str) -> Result<BridgeValue, BridgeError> {
        Err(BridgeError::ScriptFailed {
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn test_dispatch_normalizes_success() {
        let scripted = Arc::new(ScriptedBridge::with_responses([Ok(BridgeValue::Text(
            "true".to_string(),
        ))]));
        let bridge: Arc<dyn AutomationBridge> = scripted.clone();
        let (delivery, outcome) = Delivery::new(None);

        dispatch(
            &bridge,
            OperationKind::IsOpen,
            script::is_open("Finder"),
            normalize::is_open,
            delivery,
        );

        assert_eq!(outcome.into_deferred().unwrap().wait(), Ok(true));
        assert_eq!(scripted.dispatch_count(), 1);
    }

    #[test]
    fn test_dispatch_propagates_bridge_failure() {
        let scripted = Arc::new(ScriptedBridge::with_responses([script_failed(
            "Application can't be found.",
        )]));
        let bridge: Arc<dyn AutomationBridge> = scripted.clone();
        let (delivery, outcome) = Delivery::new(None);

        dispatch(
            &bridge,
            OperationKind::Focus,
            script::focus("Nope"),
            normalize::discard,
            delivery,
        );

        assert!(matches!(
            outcome.into_deferred().unwrap().wait(),
            Err(ControlError::BridgeExecutionFailure { ref message }) if message.contains("can't be found")
        ));
        assert_eq!(scripted.dispatch_count(), 1);
    }

    #[test]
    fn test_minimize_success_does_not_fall_back() {
        let scripted = Arc::new(ScriptedBridge::new());
        let bridge: Arc<dyn AutomationBridge> = scripted.clone();
        let (delivery, outcome) = Delivery::new(None);

        dispatch_minimize(
            &bridge,
            "Notes".to_string(),
            script::minimize("Notes", true),
            delivery,
        );

        assert_eq!(outcome.into_deferred().unwrap().wait(), Ok(()));
        assert_eq!(scripted.dispatched(), vec![script::minimize("Notes", true)]);
    }

    #[test]
    fn test_minimize_failure_falls_back_to_hide_once() {
        let scripted = Arc::new(ScriptedBridge::with_responses([
            script_failed("Can't set miniaturized"),
            Ok(BridgeValue::Empty),
        ]));
        let bridge: Arc<dyn AutomationBridge> = scripted.clone();
        let (delivery, outcome) = Delivery::new(None);

        dispatch_minimize(
            &bridge,
            "Notes".to_string(),
            script::minimize("Notes", false),
            delivery,
        );

        assert_eq!(outcome.into_deferred().unwrap().wait(), Ok(()));
        assert_eq!(
            scripted.dispatched(),
            vec![script::minimize("Notes", false), script::hide("Notes")]
        );
    }

    #[test]
    fn test_minimize_fallback_failure_is_final() {
        let scripted = Arc::new(ScriptedBridge::with_responses([
            script_failed("primary"),
            script_failed("fallback"),
        ]));
        let bridge: Arc<dyn AutomationBridge> = scripted.clone();
        let (delivery, outcome) = Delivery::new(None);

        dispatch_minimize(
            &bridge,
            "Notes".to_string(),
            script::minimize("Notes", true),
            delivery,
        );

        match outcome.into_deferred().unwrap().wait() {
            Err(ControlError::BridgeExecutionFailure { message }) => {
                assert!(message.contains("fallback"));
                assert!(!message.contains("primary"));
            }
            other => panic!("expected fallback failure, got {:?}", other),
        }
        assert_eq!(scripted.dispatch_count(), 2);
    }
}
