use std::sync::Arc;
use tracing::{info, warn};

use crate::bridge::{AutomationBridge, OsascriptBridge, Script};
use crate::config::AppctlConfig;
use crate::control::args::{Arg, CallShape, classify};
use crate::control::delivery::{Delivery, Outcome};
use crate::control::dispatch::{dispatch, dispatch_minimize};
use crate::control::errors::ControlError;
use crate::control::types::{OperationKind, OperationRequest};
use crate::control::{normalize, script, validation};
use crate::errors::AppctlError;

/// Controller for running applications.
///
/// Every operation takes positional arguments, and supports two invocation
/// styles:
///
/// - With a trailing [`Arg::Callback`], the outcome is passed to the callback
///   exactly once and the call returns [`Outcome::Delivered`].
/// - Without one, the call returns [`Outcome::Deferred`] holding a handle
///   that resolves with the outcome.
///
/// Argument-shape errors travel the same way as results. The only error
/// returned directly is `InvalidCallbackType`, when the callback position
/// holds something that is not a callback.
///
/// # Example
///
/// ```rust,no_run
/// use appctl::{AppControl, Arg};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let control = AppControl::osascript();
///
/// // Deferred style
/// let open = control.is_open(vec!["Finder".into()])?;
/// if let Some(handle) = open.into_deferred() {
///     println!("Finder running: {}", handle.wait()?);
/// }
///
/// // Callback style
/// control.focus(vec![
///     "Finder".into(),
///     Arg::callback(|result| println!("focused: {:?}", result)),
/// ])?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AppControl {
    bridge: Arc<dyn AutomationBridge>,
}

impl std::fmt::Debug for AppControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppControl")
            .field("bridge", &self.bridge.name())
            .finish()
    }
}

impl AppControl {
    pub fn new<B: AutomationBridge + 'static>(bridge: B) -> Self {
        Self {
            bridge: Arc::new(bridge),
        }
    }

    /// Build a controller over a bridge the caller keeps a handle to.
    pub fn from_shared(bridge: Arc<dyn AutomationBridge>) -> Self {
        Self { bridge }
    }

    /// Controller backed by `osascript` with default settings.
    pub fn osascript() -> Self {
        Self::new(OsascriptBridge::default())
    }

    /// Controller backed by `osascript` using the given configuration.
    pub fn from_config(config: &AppctlConfig) -> Self {
        Self::new(OsascriptBridge::new(config.bridge.clone()))
    }

    /// The primary script a request would dispatch, without dispatching it.
    pub fn script_for(&self, request: &OperationRequest) -> Script {
        request.script()
    }

    /// List running application names, in the order the system reports them.
    ///
    /// Arguments: `(options?, callback?)` where options is
    /// `{"background": bool}` (default `false`).
    pub fn running_applications(
        &self,
        args: Vec<Arg<Vec<String>>>,
    ) -> Result<Outcome<Vec<String>>, ControlError> {
        let operation = OperationKind::ListRunning;
        info!(
            event = "core.appctl.running_applications_started",
            arg_count = args.len()
        );

        let call = classify(args, CallShape::Options, operation)?;
        let (delivery, outcome) = Delivery::new(call.callback);

        match validation::list_options(call.options.as_ref()) {
            Ok(options) => dispatch(
                &self.bridge,
                operation,
                script::list_running(options.background),
                normalize::running_applications,
                delivery,
            ),
            Err(error) => reject(operation, delivery, error),
        }

        Ok(outcome)
    }

    /// Check whether an application is running.
    ///
    /// Arguments: `(application, callback?)`.
    pub fn is_open(&self, args: Vec<Arg<bool>>) -> Result<Outcome<bool>, ControlError> {
        let operation = OperationKind::IsOpen;
        info!(event = "core.appctl.is_open_started", arg_count = args.len());

        let call = classify(args, CallShape::Target, operation)?;
        let (delivery, outcome) = Delivery::new(call.callback);

        match validation::application(call.target.as_ref(), operation) {
            Ok(application) => dispatch(
                &self.bridge,
                operation,
                script::is_open(&application),
                normalize::is_open,
                delivery,
            ),
            Err(error) => reject(operation, delivery, error),
        }

        Ok(outcome)
    }

    /// Quit one application, or several in order with a single script.
    ///
    /// Arguments: `(application | [applications], callback?)`.
    pub fn quit(&self, args: Vec<Arg<()>>) -> Result<Outcome<()>, ControlError> {
        let operation = OperationKind::Quit;
        info!(event = "core.appctl.quit_started", arg_count = args.len());

        let call = classify(args, CallShape::Target, operation)?;
        let (delivery, outcome) = Delivery::new(call.callback);

        match validation::quit_target(call.target.as_ref()) {
            Ok(target) => dispatch(
                &self.bridge,
                operation,
                script::quit(&target),
                normalize::discard,
                delivery,
            ),
            Err(error) => reject(operation, delivery, error),
        }

        Ok(outcome)
    }

    /// Minimize an application's windows, hiding it instead if it does not
    /// support minimizing.
    ///
    /// Arguments: `(application, options?, callback?)` where options is
    /// `{"all": bool}` (default `true`; `false` minimizes only the front
    /// window).
    pub fn minimize(&self, args: Vec<Arg<()>>) -> Result<Outcome<()>, ControlError> {
        let operation = OperationKind::Minimize;
        info!(event = "core.appctl.minimize_started", arg_count = args.len());

        let call = classify(args, CallShape::TargetOptions, operation)?;
        let (delivery, outcome) = Delivery::new(call.callback);

        let validated = validation::application(call.target.as_ref(), operation).and_then(
            |application| {
                validation::minimize_options(call.options.as_ref())
                    .map(|options| (application, options))
            },
        );

        match validated {
            Ok((application, options)) => {
                let primary = script::minimize(&application, options.all);
                dispatch_minimize(&self.bridge, application, primary, delivery);
            }
            Err(error) => reject(operation, delivery, error),
        }

        Ok(outcome)
    }

    /// Bring an application to the foreground.
    ///
    /// Arguments: `(application, callback?)`.
    pub fn focus(&self, args: Vec<Arg<()>>) -> Result<Outcome<()>, ControlError> {
        let operation = OperationKind::Focus;
        info!(event = "core.appctl.focus_started", arg_count = args.len());

        let call = classify(args, CallShape::Target, operation)?;
        let (delivery, outcome) = Delivery::new(call.callback);

        match validation::application(call.target.as_ref(), operation) {
            Ok(application) => dispatch(
                &self.bridge,
                operation,
                script::focus(&application),
                normalize::discard,
                delivery,
            ),
            Err(error) => reject(operation, delivery, error),
        }

        Ok(outcome)
    }
}

/// Deliver an argument-shape error without touching the bridge.
fn reject<T>(operation: OperationKind, delivery: Delivery<T>, error: ControlError) {
    warn!(
        event = "core.appctl.validation_failed",
        operation = %operation,
        error_code = error.error_code(),
        error = %error
    );
    delivery.deliver(Err(error));
}
