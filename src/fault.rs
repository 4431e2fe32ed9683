//! Fault isolation at operation boundaries.
//!
//! Repository and service methods run their bodies through a
//! [`FaultBoundary`]. A panic inside the body is caught, logged with the layer
//! and operation name, and returned as a [`Fault`] so the caller receives an
//! ordinary error and sibling operations keep running.

use crate::logging::Logger;
use futures::FutureExt;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

/// A panic caught at an operation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unexpected fault in {layer}.{operation}: {cause}")]
pub struct Fault {
    layer: &'static str,
    operation: &'static str,
    cause: String,
}

impl Fault {
    /// Layer in which the fault was caught.
    #[must_use]
    pub const fn layer(&self) -> &'static str {
        self.layer
    }

    /// Operation that faulted.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    /// Panic message, when the payload carried one.
    #[must_use]
    pub fn cause(&self) -> &str {
        &self.cause
    }
}

/// Guarded-call wrapper for one architectural layer.
#[derive(Debug, Clone)]
pub struct FaultBoundary {
    layer: &'static str,
    logger: Logger,
}

impl FaultBoundary {
    /// Creates a boundary that reports faults under `layer`.
    #[must_use]
    pub const fn new(layer: &'static str, logger: Logger) -> Self {
        Self { layer, logger }
    }

    /// Returns the logger faults are reported to.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Runs a synchronous body, converting a panic into `E`.
    ///
    /// # Errors
    ///
    /// Returns the body's own error, or a [`Fault`] converted into `E` when
    /// the body panics.
    pub fn run<T, E, F>(&self, operation: &'static str, body: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<Fault>,
    {
        match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(result) => result,
            Err(payload) => Err(self.caught(operation, &*payload).into()),
        }
    }

    /// Awaits an asynchronous body, converting a panic into `E`.
    ///
    /// # Errors
    ///
    /// Returns the body's own error, or a [`Fault`] converted into `E` when
    /// the body panics while being polled.
    pub async fn run_async<T, E, Fut>(&self, operation: &'static str, body: Fut) -> Result<T, E>
    where
        Fut: Future<Output = Result<T, E>>,
        E: From<Fault>,
    {
        match AssertUnwindSafe(body).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(self.caught(operation, &*payload).into()),
        }
    }

    fn caught(&self, operation: &'static str, payload: &(dyn Any + Send)) -> Fault {
        let cause = panic_message(payload);
        self.logger.fault(self.layer, operation, &cause);
        Fault {
            layer: self.layer,
            operation,
            cause,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_owned();
    }
    payload
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}
