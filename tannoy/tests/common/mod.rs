//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};
use tannoy::{Args, BoxError, Dispatcher, Handler};

/// The canonical privmsg contract.
pub const PRIVMSG_PARAMS: [&str; 4] = ["connection", "user", "target", "message"];

/// An opaque connection handle, as a live driver would carry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conn(pub &'static str);

/// Declare the canonical `privmsg` event.
pub fn declare_privmsg(dispatch: &mut Dispatcher) {
    dispatch.declare("privmsg", &PRIVMSG_PARAMS).unwrap();
}

/// One concrete privmsg occurrence.
pub fn privmsg_args() -> Args {
    Args::new()
        .with("connection", Conn("irc.example.net"))
        .with("user", "|Nyx|")
        .with("target", "Tritium")
        .with("message", "Hello There")
}

/// Records its id into a shared log on every call.
pub struct OrderRecordingHandler {
    pub id: usize,
    pub order: Arc<Mutex<Vec<usize>>>,
}

impl Handler for OrderRecordingHandler {
    fn call(&self, _args: &Args) -> Result<(), BoxError> {
        self.order.lock().unwrap().push(self.id);
        Ok(())
    }
}
