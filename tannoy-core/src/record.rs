//! Typed event records.
//!
//! The loose [`Args`](crate::Args) bag is what the wire gives a driver; a
//! component that owns both ends of an event can do better. Implementing
//! [`Record`] ties an event name and its argument contract to a concrete
//! type, so producing an occurrence with a missing or misnamed field stops
//! compiling instead of failing validation at runtime.

use crate::args::Args;

/// A record type carrying one event's arguments as fields.
///
/// The dispatcher's `declare_record` / `subscribe_record` / `fire_record`
/// operations read the contract from the type, giving the same runtime
/// behavior as the string-keyed operations with the field set checked by
/// the compiler at every call site.
///
/// # Example
///
/// ```rust,ignore
/// struct Privmsg {
///     connection: Conn,
///     user: String,
///     target: String,
///     message: String,
/// }
///
/// impl Record for Privmsg {
///     const EVENT: &'static str = "privmsg";
///     const ARGUMENTS: &'static [&'static str] =
///         &["connection", "user", "target", "message"];
///
///     fn into_args(self) -> Args {
///         Args::new()
///             .with("connection", self.connection)
///             .with("user", self.user)
///             .with("target", self.target)
///             .with("message", self.message)
///     }
/// }
/// ```
pub trait Record {
    /// The event name this record belongs to.
    const EVENT: &'static str;

    /// The argument names, one per field.
    const ARGUMENTS: &'static [&'static str];

    /// Decompose into the keyword-argument bag `fire` delivers.
    ///
    /// Must insert exactly the names in [`ARGUMENTS`](Self::ARGUMENTS);
    /// anything else trips the contract check when the record is fired.
    fn into_args(self) -> Args;
}
