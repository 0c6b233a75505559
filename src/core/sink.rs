//! Sink trait and channel output bindings

use super::{error::Result, message::Message};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Destination that receives the messages delivered on a channel.
///
/// A sink is only ever driven by the worker that owns its channel, so
/// implementations do not need their own synchronization.
pub trait Sink: Send {
    fn write(&mut self, message: &Message) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// A sink the caller keeps a handle to.
pub type SharedSink = Arc<Mutex<dyn Sink>>;

/// A sink bound to a channel, together with who owns it.
///
/// An `Owned` sink is destroyed by the system when its binding is replaced,
/// cleared, or when the system is torn down. A `Shared` sink is only released;
/// the caller's handle keeps it alive.
pub enum Output {
    Owned(Box<dyn Sink>),
    Shared(SharedSink),
}

impl Output {
    pub fn owned<S: Sink + 'static>(sink: S) -> Self {
        Output::Owned(Box::new(sink))
    }

    pub fn shared<S: Sink + 'static>(sink: &Arc<Mutex<S>>) -> Self {
        let sink: SharedSink = sink.clone();
        Output::Shared(sink)
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Output::Owned(_))
    }

    pub fn name(&self) -> String {
        match self {
            Output::Owned(sink) => sink.name().to_string(),
            Output::Shared(sink) => sink.lock().name().to_string(),
        }
    }

    pub(crate) fn write(&mut self, message: &Message) -> Result<()> {
        match self {
            Output::Owned(sink) => sink.write(message),
            Output::Shared(sink) => sink.lock().write(message),
        }
    }

    pub(crate) fn flush(&mut self) -> Result<()> {
        match self {
            Output::Owned(sink) => sink.flush(),
            Output::Shared(sink) => sink.lock().flush(),
        }
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_owned() { "Owned" } else { "Shared" };
        f.debug_tuple(kind).field(&self.name()).finish()
    }
}

impl<S: Sink + 'static> From<Box<S>> for Output {
    fn from(sink: Box<S>) -> Self {
        Output::Owned(sink)
    }
}

impl From<SharedSink> for Output {
    fn from(sink: SharedSink) -> Self {
        Output::Shared(sink)
    }
}
