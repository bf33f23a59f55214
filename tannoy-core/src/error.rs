//! Error types for Tannoy.
//!
//! One structured error type, [`DispatchError`], covers every registry
//! operation. Every variant except [`DispatchError::EventUndefined`] is a
//! wiring mistake that should terminate startup or the offending call site;
//! `EventUndefined` is the single condition live drivers are expected to
//! tolerate.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors surfaced by the dispatch registry.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The event name already has a declared contract.
    #[error("event `{0}` is already declared")]
    DuplicateEvent(String),

    /// An argument name that cannot be bound as a parameter.
    #[error("`{0}` is not a valid argument identifier")]
    InvalidArgumentName(String),

    /// Subscribing against an event name with no declared contract.
    #[error("event `{0}` is not declared")]
    UndeclaredEvent(String),

    /// Handler parameters or fired arguments differ from the declared
    /// contract. Both sides are reported sorted.
    #[error("argument mismatch for event `{event}`: expected {expected:?}, got {actual:?}")]
    ArgumentMismatch {
        /// The event whose contract was violated.
        event: String,
        /// The declared argument names.
        expected: Vec<String>,
        /// The names actually supplied.
        actual: Vec<String>,
    },

    /// Firing an event name nobody declared.
    ///
    /// This is the one expected-at-runtime condition: a driver pumping raw
    /// occurrences may emit event names no component cares about.
    #[error("fired event `{0}` has no declaration")]
    EventUndefined(String),

    /// A handler failed mid-dispatch; later handlers for that occurrence
    /// were skipped.
    #[error("handler for event `{event}` failed")]
    Handler {
        /// The event being dispatched when the handler failed.
        event: String,
        /// The handler's own error.
        #[source]
        source: BoxError,
    },
}

impl DispatchError {
    /// Whether this is the tolerated unknown-event condition.
    ///
    /// Drivers feeding a dispatcher from a live event loop must swallow
    /// exactly this variant and let every other error propagate as a fatal
    /// wiring bug. See `Dispatcher::fire_if_declared` in the `tannoy` crate
    /// for the packaged form of that discipline.
    pub fn is_undefined(&self) -> bool {
        matches!(self, DispatchError::EventUndefined(_))
    }
}
