//! Clone-to-share dispatcher for concurrent hosts.
//!
//! The plain [`Dispatcher`] is single-threaded by construction. Hosts that
//! drive it from more than one thread need one mutual-exclusion discipline
//! guarding declaration, subscription, and dispatch together;
//! [`SharedDispatcher`] packages that as a reference-counted wrapper.

use crate::dispatcher::Dispatcher;
use std::sync::{Arc, PoisonError, RwLock};
use tannoy_core::{Args, DispatchError, Handler, Record};

/// A reference-counted, lock-guarded [`Dispatcher`].
///
/// One `RwLock` guards both maps: `declare`, `subscribe`, and `clear` take
/// the write lock, `fire` takes the read lock. After initialization
/// completes, steady-state dispatch from any number of threads proceeds
/// without write contention.
///
/// Cloning is O(1) and every clone observes the same underlying registry.
///
/// # Example
///
/// ```rust,ignore
/// let dispatch = SharedDispatcher::new();
/// dispatch.declare("privmsg", &["user", "message"])?;
///
/// let pump = dispatch.clone();
/// std::thread::spawn(move || {
///     pump.fire_if_declared("privmsg", args! { user = "|Nyx|", message = "hi" })
/// });
/// ```
#[derive(Clone, Default)]
pub struct SharedDispatcher {
    inner: Arc<RwLock<Dispatcher>>,
}

impl SharedDispatcher {
    /// Create an empty shared dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an already-wired [`Dispatcher`].
    pub fn from_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            inner: Arc::new(RwLock::new(dispatcher)),
        }
    }

    /// [`Dispatcher::declare`] under the write lock.
    pub fn declare(&self, event: &str, arguments: &[&str]) -> Result<(), DispatchError> {
        self.write().declare(event, arguments)
    }

    /// [`Dispatcher::subscribe`] under the write lock.
    pub fn subscribe<H: Handler>(
        &self,
        event: &str,
        parameters: &[&str],
        handler: H,
    ) -> Result<Arc<H>, DispatchError> {
        self.write().subscribe(event, parameters, handler)
    }

    /// [`Dispatcher::fire`] under the read lock.
    ///
    /// Handlers run while the read lock is held: a handler must not call
    /// back into `declare`, `subscribe`, or `clear` on the same dispatcher.
    pub fn fire(&self, event: &str, args: Args) -> Result<bool, DispatchError> {
        self.read().fire(event, args)
    }

    /// [`Dispatcher::fire_if_declared`] under the read lock.
    pub fn fire_if_declared(&self, event: &str, args: Args) -> Result<bool, DispatchError> {
        self.read().fire_if_declared(event, args)
    }

    /// [`Dispatcher::fire_record`] under the read lock.
    pub fn fire_record<R: Record>(&self, record: R) -> Result<bool, DispatchError> {
        self.read().fire_record(record)
    }

    /// Whether `event` has a declared contract.
    pub fn is_declared(&self, event: &str) -> bool {
        self.read().is_declared(event)
    }

    /// Number of subscriptions for `event`.
    pub fn subscriber_count(&self, event: &str) -> usize {
        self.read().subscriber_count(event)
    }

    /// [`Dispatcher::clear`] under the write lock.
    pub fn clear(&self) {
        self.write().clear();
    }

    // Poisoning is recovered by taking the inner value: handlers only ever
    // see `&Args`, so a panicking handler cannot leave the guarded maps
    // half-written.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Dispatcher> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Dispatcher> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
