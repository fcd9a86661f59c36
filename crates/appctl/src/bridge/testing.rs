//! Scripted bridge double for exercising controllers without touching the OS.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::traits::{AutomationBridge, BridgeCallback, BridgeResult};
use super::types::{BridgeValue, Script};

/// Bridge that records every dispatched script and replies with queued
/// results in order.
///
/// When the queue is empty each call succeeds with [`BridgeValue::Empty`].
/// Callbacks are invoked inline, before `execute` returns.
#[derive(Debug, Default)]
pub struct ScriptedBridge {
    responses: Mutex<VecDeque<BridgeResult>>,
    dispatched: Mutex<Vec<Script>>,
}

impl ScriptedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(responses: impl IntoIterator<Item = BridgeResult>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            dispatched: Mutex::new(Vec::new()),
        }
    }

    /// Queue the result for the next unanswered dispatch.
    pub fn push(&self, response: BridgeResult) {
        lock(&self.responses).push_back(response);
    }

    /// Scripts dispatched so far, oldest first.
    pub fn dispatched(&self) -> Vec<Script> {
        lock(&self.dispatched).clone()
    }

    pub fn dispatch_count(&self) -> usize {
        lock(&self.dispatched).len()
    }
}

impl AutomationBridge for ScriptedBridge {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn execute(&self, script: Script, done: BridgeCallback) {
        lock(&self.dispatched).push(script);
        let response = lock(&self.responses)
            .pop_front()
            .unwrap_or(Ok(BridgeValue::Empty));
        done(response);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::errors::BridgeError;

    #[test]
    fn test_replays_responses_in_order() {
        let bridge = ScriptedBridge::with_responses([
            Ok(BridgeValue::Text("first".to_string())),
            Err(BridgeError::ScriptFailed {
                stderr: "second".to_string(),
            }),
        ]);

        let mut seen = Vec::new();
        for _ in 0..3 {
            let (tx, rx) = std::sync::mpsc::channel();
            bridge.execute(
                Script::new("x"),
                Box::new(move |result| {
                    tx.send(result).unwrap();
                }),
            );
            seen.push(rx.recv().unwrap());
        }

        assert!(matches!(&seen[0], Ok(BridgeValue::Text(t)) if t == "first"));
        assert!(matches!(&seen[1], Err(BridgeError::ScriptFailed { .. })));
        assert!(matches!(&seen[2], Ok(BridgeValue::Empty)));
        assert_eq!(bridge.dispatch_count(), 3);
    }

    #[test]
    fn test_records_scripts() {
        let bridge = ScriptedBridge::new();
        bridge.execute(Script::new("a"), Box::new(|_| {}));
        bridge.push(Ok(BridgeValue::Empty));
        bridge.execute(Script::new("b"), Box::new(|_| {}));

        let scripts: Vec<String> = bridge
            .dispatched()
            .into_iter()
            .map(Script::into_string)
            .collect();
        assert_eq!(scripts, vec!["a", "b"]);
    }
}
