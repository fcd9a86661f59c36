//! Result delivery for the two invocation styles.
//!
//! Every call builds exactly one [`Delivery`] from its optional callback.
//! Pipeline code only ever calls [`Delivery::deliver`], which consumes the
//! delivery, so an outcome can be reported at most once.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::control::args::Callback;
use crate::control::errors::ControlError;

/// Where an operation's outcome goes.
pub(crate) enum Delivery<T> {
    Callback(Callback<T>),
    Deferred(oneshot::Sender<Result<T, ControlError>>),
}

impl<T> Delivery<T> {
    /// Build the delivery for a call, plus the value returned to the caller.
    pub(crate) fn new(callback: Option<Callback<T>>) -> (Self, Outcome<T>) {
        match callback {
            Some(callback) => (Delivery::Callback(callback), Outcome::Delivered),
            None => {
                let (tx, rx) = oneshot::channel();
                (Delivery::Deferred(tx), Outcome::Deferred(Deferred { rx }))
            }
        }
    }

    pub(crate) fn deliver(self, result: Result<T, ControlError>) {
        match self {
            Delivery::Callback(callback) => callback(result),
            Delivery::Deferred(tx) => {
                // The caller may have dropped the handle; nobody is left to tell.
                let _ = tx.send(result);
            }
        }
    }
}

/// What an operation call returns to its caller.
#[derive(Debug)]
pub enum Outcome<T> {
    /// A callback was supplied; the result goes there.
    Delivered,
    /// No callback was supplied; the result resolves this handle.
    Deferred(Deferred<T>),
}

impl<T> Outcome<T> {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn into_deferred(self) -> Option<Deferred<T>> {
        match self {
            Outcome::Delivered => None,
            Outcome::Deferred(deferred) => Some(deferred),
        }
    }
}

/// Handle resolved exactly once with an operation's outcome.
#[must_use = "a deferred handle does nothing unless awaited"]
pub struct Deferred<T> {
    rx: oneshot::Receiver<Result<T, ControlError>>,
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T> Deferred<T> {
    /// Block the current thread until the outcome is available.
    ///
    /// Must not be called from inside an async runtime.
    pub fn wait(self) -> Result<T, ControlError> {
        futures::executor::block_on(self)
    }
}

impl<T> Future for Deferred<T> {
    type Output = Result<T, ControlError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| {
            received.unwrap_or_else(|_| {
                Err(ControlError::BridgeExecutionFailure {
                    message: "automation bridge dropped the request without reporting a result"
                        .to_string(),
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_callback_delivery() {
        let (tx, rx) = mpsc::channel();
        let callback: Callback<u32> = Box::new(move |result| {
            tx.send(result).unwrap();
        });
        let (delivery, outcome) = Delivery::new(Some(callback));

        assert!(outcome.is_delivered());
        delivery.deliver(Ok(7));
        assert_eq!(rx.recv().unwrap(), Ok(7));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_deferred_delivery_resolves() {
        let (delivery, outcome) = Delivery::<u32>::new(None);
        let deferred = outcome.into_deferred().unwrap();

        delivery.deliver(Ok(3));
        assert_eq!(deferred.wait(), Ok(3));
    }

    #[test]
    fn test_deferred_delivery_rejects() {
        let (delivery, outcome) = Delivery::<()>::new(None);
        let error = ControlError::BridgeExecutionFailure {
            message: "boom".to_string(),
        };

        delivery.deliver(Err(error.clone()));
        assert_eq!(outcome.into_deferred().unwrap().wait(), Err(error));
    }

    #[test]
    fn test_dropped_delivery_rejects_deferred() {
        let (delivery, outcome) = Delivery::<()>::new(None);
        drop(delivery);

        assert!(matches!(
            outcome.into_deferred().unwrap().wait(),
            Err(ControlError::BridgeExecutionFailure { .. })
        ));
    }

    #[test]
    fn test_deliver_after_handle_dropped_does_not_panic() {
        let (delivery, outcome) = Delivery::<()>::new(None);
        drop(outcome);
        delivery.deliver(Ok(()));
    }
}
