//! Per-message logger

use super::{
    channel::ChannelId,
    manipulator::Manipulator,
    message::Message,
    priority::Priority,
    system::LoggerSystem,
};
use std::fmt::{self, Write as _};

/// Anything that can be pushed into a [`Logger`].
///
/// Every [`Display`](fmt::Display) value is appended to the message text;
/// a [`Manipulator`] acts on the logger instead.
pub trait LogArg {
    fn apply_to(self, logger: &mut Logger<'_>);
}

impl<T: fmt::Display> LogArg for T {
    fn apply_to(self, logger: &mut Logger<'_>) {
        let _ = write!(logger.buffer, "{}", self);
    }
}

impl LogArg for Manipulator {
    fn apply_to(self, logger: &mut Logger<'_>) {
        logger.apply(self);
    }
}

/// Builds one message at a time for a channel.
///
/// Text is always buffered; the priority check only happens when the message
/// is completed with [`flush`](Logger::flush) or the `end()` manipulator. A
/// logger is cheap to create and meant to be used by a single thread.
///
/// # Example
///
/// ```
/// use channel_logger::prelude::*;
///
/// let system = LoggerSystem::new();
/// let mut logger = Logger::builder()
///     .channel("disk")
///     .min_priority(Priority::Warning)
///     .build_on(&system);
///
/// logger.push("usage at ").push(42).push('%').push(end());
/// assert_eq!(system.pending_count(), 0);
///
/// logger.push(warning()).push("usage at ").push(93).push('%').push(end());
/// assert_eq!(system.pending_count(), 1);
/// ```
pub struct Logger<'a> {
    system: &'a LoggerSystem,
    channel: ChannelId,
    min_priority: Priority,
    priority: Priority,
    buffer: String,
}

impl Logger<'static> {
    /// Logger on the default channel of the global system.
    #[must_use]
    pub fn new() -> Self {
        Logger::on(LoggerSystem::instance())
    }

    #[must_use]
    pub fn with_channel(channel: impl Into<ChannelId>) -> Self {
        Logger::builder().channel(channel).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Logger<'a> {
    /// Logger on the default channel of `system`, inheriting its threshold.
    pub fn on(system: &'a LoggerSystem) -> Self {
        Self {
            system,
            channel: ChannelId::default(),
            min_priority: system.effective_min_priority(),
            priority: Priority::default(),
            buffer: String::new(),
        }
    }

    /// Append a value or run a manipulator.
    pub fn push<A: LogArg>(&mut self, arg: A) -> &mut Self {
        arg.apply_to(self);
        self
    }

    pub fn apply(&mut self, manipulator: Manipulator) -> &mut Self {
        match manipulator {
            Manipulator::SetPriority(priority) => self.set_priority(priority),
            Manipulator::Flush => {
                self.flush();
            }
            Manipulator::Reset => self.reset(),
        }
        self
    }

    pub fn channel(&self) -> &ChannelId {
        &self.channel
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn min_priority(&self) -> Priority {
        self.min_priority
    }

    /// Replace the threshold of a freshly built logger.
    #[must_use]
    pub fn with_min_priority(mut self, min_priority: Priority) -> Self {
        self.min_priority = min_priority;
        self
    }

    /// Text buffered for the current message.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard the current message without forwarding it.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Complete the current message.
    ///
    /// The text is queued on the logger's channel if the current priority is
    /// at least the threshold; either way the buffer is emptied. An empty
    /// message is never queued. Returns whether a message was queued.
    pub fn flush(&mut self) -> bool {
        if self.buffer.is_empty() {
            return false;
        }

        let text = std::mem::take(&mut self.buffer);
        if self.priority < self.min_priority {
            self.system.metrics().record_filtered();
            return false;
        }

        self.system
            .submit(Message::new(self.channel.clone(), self.priority, text));
        true
    }
}

impl fmt::Write for Logger<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl fmt::Debug for Logger<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("channel", &self.channel)
            .field("min_priority", &self.min_priority)
            .field("priority", &self.priority)
            .field("buffer", &self.buffer)
            .finish()
    }
}

/// Builder for [`Logger`]
///
/// # Example
/// ```
/// use channel_logger::prelude::*;
///
/// let system = LoggerSystem::new();
/// let logger = Logger::builder()
///     .channel("net")
///     .min_priority(Priority::Debug)
///     .priority(Priority::Warning)
///     .build_on(&system);
///
/// assert_eq!(logger.channel().as_str(), "net");
/// assert_eq!(logger.priority(), Priority::Warning);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerBuilder {
    channel: ChannelId,
    min_priority: Option<Priority>,
    priority: Priority,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn channel(mut self, channel: impl Into<ChannelId>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Fixed threshold; without it the system's current default is inherited.
    #[must_use = "builder methods return a new value"]
    pub fn min_priority(mut self, min_priority: Priority) -> Self {
        self.min_priority = Some(min_priority);
        self
    }

    /// Initial priority of the messages built.
    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Build a logger on the global system.
    pub fn build(self) -> Logger<'static> {
        self.build_on(LoggerSystem::instance())
    }

    pub fn build_on(self, system: &LoggerSystem) -> Logger<'_> {
        Logger {
            system,
            channel: self.channel,
            min_priority: self
                .min_priority
                .unwrap_or_else(|| system.effective_min_priority()),
            priority: self.priority,
            buffer: String::new(),
        }
    }
}
