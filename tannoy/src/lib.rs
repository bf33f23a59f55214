//! # tannoy - Contract-Checked Event Dispatch Registry
//!
//! `tannoy` lets independent components declare named events with a fixed
//! argument contract, register handlers against those events, and later
//! fire an event by name with keyword-style arguments. The contract is
//! enforced when wiring happens, not when events flow: a handler with the
//! wrong parameter names is rejected at `subscribe`, a malformed argument
//! name at `declare`, so a mistake fails at startup rather than on first
//! use.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tannoy::{args, Args, BoxError, Dispatcher};
//!
//! let mut dispatch = Dispatcher::new();
//!
//! // Setup time: declare the contract, then subscribe against it.
//! dispatch.declare("privmsg", &["connection", "user", "target", "message"])?;
//! dispatch.subscribe(
//!     "privmsg",
//!     &["connection", "user", "target", "message"],
//!     |args: &Args| -> Result<(), BoxError> {
//!         let user: &&str = args.get("user").ok_or("user missing")?;
//!         let message: &&str = args.get("message").ok_or("message missing")?;
//!         println!("<{user}> {message}");
//!         Ok(())
//!     },
//! )?;
//!
//! // Steady state: one fire per inbound occurrence.
//! dispatch.fire("privmsg", args! {
//!     connection = conn,
//!     user = "|Nyx|",
//!     target = "Tritium",
//!     message = "Hello There",
//! })?;
//! ```
//!
//! ## Driving from an event pump
//!
//! A driver that pumps raw occurrences (a network client, a replayed log)
//! calls [`Dispatcher::fire_if_declared`] once per occurrence: event names
//! nobody declared are swallowed as `Ok(false)` - unrecognized events are
//! normal operation - while every other error propagates as a wiring bug.
//!
//! ## Components
//!
//! - [`Catalog`] holds the declared contracts ([`EventSpec`])
//! - [`Registry`] holds the handlers, validated at subscribe time
//! - [`Dispatcher`] is the facade over both; one owned value per process
//! - [`SharedDispatcher`] adapts a dispatcher to concurrent hosts with a
//!   single lock discipline
//! - [`testing`] provides instrumented handlers for embedders' tests
//!
//! Dispatch is synchronous: `fire` runs every handler for the event on the
//! caller's thread, in registration order, before returning. There is no
//! queueing, no prioritization, and no per-event unregistration; `clear`
//! resets the whole registry for test isolation.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod catalog;
pub mod dispatcher;
pub mod registry;
pub mod shared;
pub mod testing;

pub use catalog::{Catalog, EventSpec};
pub use dispatcher::Dispatcher;
pub use registry::Registry;
pub use shared::SharedDispatcher;

// Core vocabulary, re-exported so embedders depend on one crate.
pub use tannoy_core::{Args, BoxError, DispatchError, Handler, Record, Value, args, ident};
