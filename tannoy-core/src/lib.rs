//! # tannoy-core
//!
//! Core vocabulary for the Tannoy event dispatch registry.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! handler authors and embedders that don't need the full `tannoy`
//! dispatcher. It provides:
//!
//! - [`DispatchError`] - the error taxonomy shared by every registry
//!   operation
//! - [`Args`] and [`Value`] - the keyword-style argument bag delivered to
//!   handlers, plus the [`args!`] builder macro
//! - [`Handler`] - the object-safe seam subscribers implement
//! - [`Record`] - optional typed records for events a component owns both
//!   ends of
//! - [`ident`] - argument-identifier validation against Rust naming rules
//!
//! # Contract-first dispatch
//!
//! Tannoy enforces the contract between event producers and consumers at
//! registration time rather than at call time: an event is declared once
//! with the exact set of argument names every occurrence must carry, and a
//! handler whose parameter list does not match that set is rejected when it
//! subscribes, not when the event first fires. A wiring mistake therefore
//! fails at startup, while the one expected runtime condition - firing an
//! event name nobody declared - is distinguishable via
//! [`DispatchError::is_undefined`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod args;
mod error;
mod handler;
pub mod ident;
mod record;

// Re-exports
pub use args::{Args, Value};
pub use error::{BoxError, DispatchError};
pub use handler::Handler;
pub use record::Record;
