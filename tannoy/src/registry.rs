//! The handler registry: ordered subscriptions per event.
//!
//! Holds the per-event handler lists and performs subscription-time
//! validation of a subscriber's parameter names against the declared
//! contract. Handlers run in registration order; the same handler may be
//! subscribed more than once and is invoked once per subscription.

use crate::catalog::EventSpec;
use std::collections::HashMap;
use std::sync::Arc;
use tannoy_core::{DispatchError, Handler};

/// Event name → handlers, in registration order.
#[derive(Default)]
pub struct Registry {
    handlers: HashMap<String, Vec<Arc<dyn Handler>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `parameters` against `spec` and append the handler.
    ///
    /// `parameters` are the handler's declared parameter names, supplied
    /// explicitly since Rust has no runtime parameter introspection. They
    /// must equal the contract's argument names as a set; mismatch is
    /// [`DispatchError::ArgumentMismatch`] and the handler is not retained.
    ///
    /// On success the handler is returned unchanged behind its new `Arc`,
    /// so registration can be a transparent wrapper around construction.
    pub fn subscribe<H: Handler>(
        &mut self,
        spec: &EventSpec,
        parameters: &[&str],
        handler: H,
    ) -> Result<Arc<H>, DispatchError> {
        if !spec.matches(parameters.iter().copied()) {
            return Err(spec.mismatch_error(parameters.iter().copied()));
        }
        let handler = Arc::new(handler);
        self.handlers
            .entry(spec.name().to_owned())
            .or_default()
            .push(handler.clone());
        Ok(handler)
    }

    /// Handlers registered for `event`, in registration order.
    pub fn get(&self, event: &str) -> &[Arc<dyn Handler>] {
        self.handlers.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of subscriptions for `event`.
    pub fn count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
