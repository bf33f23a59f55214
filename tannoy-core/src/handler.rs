//! The handler seam.
//!
//! A [`Handler`] is the unit of behavior registered against one event. The
//! registry stores handlers as `Arc<dyn Handler>`: its reference is shared,
//! not owning, and the subscriber keeps its own `Arc` to any captured state.

use crate::args::Args;
use crate::error::BoxError;

/// A unit of behavior invoked on every occurrence of one event.
///
/// Handlers receive the fired argument bag by reference and return no
/// value; by contract a meaningful return value is a usage error upstream.
/// Returning `Err` aborts the remaining handlers for that occurrence and
/// surfaces out of `fire` as `DispatchError::Handler`.
///
/// Plain closures of the matching shape implement `Handler` directly:
///
/// ```rust,ignore
/// dispatch.subscribe("privmsg", &["user", "message"], |args: &Args| -> Result<(), BoxError> {
///     let user: &&str = args.get("user").ok_or("user missing")?;
///     println!("<{user}>");
///     Ok(())
/// })?;
/// ```
pub trait Handler: Send + Sync + 'static {
    /// Called once per occurrence of the subscribed event.
    fn call(&self, args: &Args) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<F> Handler for F
where
    F: Fn(&Args) -> Result<(), BoxError> + Send + Sync + 'static,
{
    fn call(&self, args: &Args) -> Result<(), BoxError> {
        (self)(args)
    }
}
