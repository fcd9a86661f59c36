//! Automation bridge trait definition.

use futures::channel::oneshot;
use futures::future::BoxFuture;

use super::errors::BridgeError;
use super::types::{BridgeValue, Script};

/// Outcome of a single script execution.
pub type BridgeResult = Result<BridgeValue, BridgeError>;

/// Completion callback handed to [`AutomationBridge::execute`].
pub type BridgeCallback = Box<dyn FnOnce(BridgeResult) + Send + 'static>;

/// Trait defining the interface to the external automation engine.
///
/// Implementations compile and run a script against the running system and
/// report the raw result. They must invoke the completion callback exactly
/// once per `execute` call, either inline or from another thread.
pub trait AutomationBridge: Send + Sync {
    /// Short name used in log events (e.g., "osascript").
    fn name(&self) -> &'static str;

    /// Run a script and report its outcome through `done`.
    fn execute(&self, script: Script, done: BridgeCallback);

    /// Run a script and resolve the returned future with its outcome.
    ///
    /// Default implementation adapts [`AutomationBridge::execute`].
    fn execute_async(&self, script: Script) -> BoxFuture<'static, BridgeResult> {
        let (tx, rx) = oneshot::channel();
        self.execute(
            script,
            Box::new(move |result| {
                let _ = tx.send(result);
            }),
        );
        Box::pin(async move { rx.await.unwrap_or(Err(BridgeError::Dropped)) })
    }
}
