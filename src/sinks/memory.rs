//! In-memory sink

use crate::core::{Message, Result, Sink};

/// Keeps every delivered message in memory.
///
/// Mostly useful for tests and for hosts that display recent log lines
/// themselves. Bind it with [`Output::shared`](crate::Output::shared) to keep
/// reading it while it is in use.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    messages: Vec<Message>,
    flushes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Text of every message received, in delivery order.
    pub fn texts(&self) -> Vec<String> {
        self.messages.iter().map(|m| m.text.clone()).collect()
    }

    /// All message texts concatenated.
    pub fn contents(&self) -> String {
        self.messages.iter().map(|m| m.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of times the system flushed this sink.
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    /// Remove and return the messages received so far.
    pub fn take(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }
}

impl Sink for MemorySink {
    fn write(&mut self, message: &Message) -> Result<()> {
        self.messages.push(message.clone());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
