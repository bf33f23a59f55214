//! Testing utilities for Tannoy.
//!
//! Instrumented handlers for verifying dispatch behavior in embedders'
//! tests:
//!
//! - [`RecordingHandler`]: records every argument bag it receives
//! - [`CountingHandler`]: counts invocations
//! - [`FailingHandler`]: always fails, for abort-path tests

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use tannoy_core::{Args, BoxError, Handler};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every [`Args`] bag it is called with.
///
/// Clones share the same recording, so one instance can be subscribed (or
/// subscribed twice) while the test keeps a handle for assertions.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new();
/// dispatch.subscribe("privmsg", &["user", "message"], recorder.clone())?;
/// dispatch.fire("privmsg", args! { user = "|Nyx|", message = "hi" })?;
/// assert_eq!(recorder.count(), 1);
/// assert_eq!(recorder.calls()[0].get::<&str>("user"), Some(&"|Nyx|"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RecordingHandler {
    calls: Arc<Mutex<Vec<Args>>>,
}

impl RecordingHandler {
    /// Create a new recording handler with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded bags, one per invocation, in invocation order.
    pub fn calls(&self) -> Vec<Args> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Clear the recording.
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl Handler for RecordingHandler {
    fn call(&self, args: &Args) -> Result<(), BoxError> {
        self.calls.lock().unwrap().push(args.clone());
        Ok(())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts its invocations and ignores the arguments.
#[derive(Clone, Debug, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl Handler for CountingHandler {
    fn call(&self, _args: &Args) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with a fixed message.
///
/// Use to verify that a failure aborts the remainder of an event's handler
/// list and surfaces as `DispatchError::Handler`.
#[derive(Clone, Debug)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler that fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Handler for FailingHandler {
    fn call(&self, _args: &Args) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
