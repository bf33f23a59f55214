//! The dispatch facade.
//!
//! [`Dispatcher`] combines the [`Catalog`] and [`Registry`] behind the four
//! operations embedders use: `declare` and `subscribe` at setup time,
//! `fire` in steady state, `clear` for full reinitialization.

use crate::catalog::{Catalog, EventSpec};
use crate::registry::Registry;
use std::sync::Arc;
use tannoy_core::{Args, DispatchError, Handler, Record};

/// The event dispatch registry.
///
/// Each event name is always in one of three states - undeclared, declared
/// with no handlers, declared with handlers - and transitions are monotonic
/// except for [`clear`](Self::clear), which resets every name to
/// undeclared. There is no per-event removal.
///
/// A `Dispatcher` is an owned value with no global state: construct one per
/// process (or per test) and pass it explicitly to whatever declares,
/// subscribes, or fires. Mutating operations take `&mut self` and `fire`
/// takes `&self`, so the borrow checker enforces the intended discipline of
/// wiring first, dispatching after, with no locking on the fire path. For
/// hosts that genuinely need concurrent access, see
/// [`SharedDispatcher`](crate::SharedDispatcher).
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatch = Dispatcher::new();
/// dispatch.declare("privmsg", &["connection", "user", "target", "message"])?;
/// dispatch.subscribe("privmsg", &["connection", "user", "target", "message"], handler)?;
///
/// let delivered = dispatch.fire("privmsg", args! {
///     connection = conn,
///     user = "|Nyx|",
///     target = "Tritium",
///     message = "Hello There",
/// })?;
/// assert!(delivered);
/// ```
#[derive(Default)]
pub struct Dispatcher {
    catalog: Catalog,
    registry: Registry,
}

impl Dispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `event` with the argument names every occurrence must carry.
    ///
    /// See [`Catalog::declare`] for the failure modes; both are programmer
    /// errors, fatal at startup.
    pub fn declare(&mut self, event: &str, arguments: &[&str]) -> Result<(), DispatchError> {
        self.catalog.declare(event, arguments)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(event, arguments = ?arguments, "declared event");
        Ok(())
    }

    /// Register `handler` for `event`.
    ///
    /// `parameters` are the handler's parameter names; they must equal the
    /// declared contract as a set. The handler is returned unchanged behind
    /// its `Arc`, so a caller can keep using it - or subscribe it again -
    /// after registration.
    pub fn subscribe<H: Handler>(
        &mut self,
        event: &str,
        parameters: &[&str],
        handler: H,
    ) -> Result<Arc<H>, DispatchError> {
        let spec = self
            .catalog
            .get(event)
            .ok_or_else(|| DispatchError::UndeclaredEvent(event.to_owned()))?;
        let handler = self.registry.subscribe(spec, parameters, handler)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(event, subscribers = self.registry.count(event), "subscribed handler");
        Ok(handler)
    }

    /// Deliver one occurrence of `event` to every registered handler.
    ///
    /// The key set of `args` must equal the declared contract. Handlers run
    /// synchronously, in registration order, each receiving the same bag;
    /// the result reflects completion of all of them, not dispatch
    /// initiation. A handler failure aborts the rest of the list for this
    /// occurrence and surfaces as [`DispatchError::Handler`].
    ///
    /// Returns `Ok(false)` when the event is declared but nobody listens -
    /// normal operation, not an error. Firing an undeclared name is
    /// [`DispatchError::EventUndefined`], the one error live drivers are
    /// expected to tolerate.
    pub fn fire(&self, event: &str, args: Args) -> Result<bool, DispatchError> {
        let spec = self
            .catalog
            .get(event)
            .ok_or_else(|| DispatchError::EventUndefined(event.to_owned()))?;
        if !spec.matches(args.names()) {
            return Err(spec.mismatch_error(args.names()));
        }
        let handlers = self.registry.get(event);
        if handlers.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!(event, "fired event with no subscribers");
            return Ok(false);
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(event, handlers = handlers.len(), "firing event");
        for handler in handlers {
            handler.call(&args).map_err(|source| DispatchError::Handler {
                event: event.to_owned(),
                source,
            })?;
        }
        Ok(true)
    }

    /// [`fire`](Self::fire), tolerating an undeclared event name.
    ///
    /// This is the call a driver makes once per raw inbound occurrence: an
    /// event name nobody declared is reported as `Ok(false)` instead of
    /// [`DispatchError::EventUndefined`], while every other error still
    /// propagates as a fatal wiring bug.
    pub fn fire_if_declared(&self, event: &str, args: Args) -> Result<bool, DispatchError> {
        match self.fire(event, args) {
            Err(err) if err.is_undefined() => Ok(false),
            other => other,
        }
    }

    /// Declare `R`'s event with the record's field set as the contract.
    pub fn declare_record<R: Record>(&mut self) -> Result<(), DispatchError> {
        self.declare(R::EVENT, R::ARGUMENTS)
    }

    /// Register `handler` against `R`'s contract.
    pub fn subscribe_record<R: Record, H: Handler>(
        &mut self,
        handler: H,
    ) -> Result<Arc<H>, DispatchError> {
        self.subscribe(R::EVENT, R::ARGUMENTS, handler)
    }

    /// Deliver one typed occurrence.
    ///
    /// Equivalent to [`fire`](Self::fire) with the record decomposed into
    /// its argument bag; the field set is already right by construction.
    pub fn fire_record<R: Record>(&self, record: R) -> Result<bool, DispatchError> {
        self.fire(R::EVENT, record.into_args())
    }

    /// The contract declared for `event`, if any.
    pub fn contract(&self, event: &str) -> Option<&EventSpec> {
        self.catalog.get(event)
    }

    /// Whether `event` has a declared contract.
    pub fn is_declared(&self, event: &str) -> bool {
        self.catalog.contains(event)
    }

    /// Number of subscriptions for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.registry.count(event)
    }

    /// Reset to the initial empty state: every declaration and every
    /// subscription is dropped together.
    ///
    /// Intended for test isolation and full reinitialization, not runtime
    /// use; dropping the dispatcher and building a new one is equivalent.
    pub fn clear(&mut self) {
        self.catalog.clear();
        self.registry.clear();
        #[cfg(feature = "tracing")]
        tracing::debug!("cleared dispatcher");
    }
}
