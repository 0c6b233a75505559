//! Completed log message

use super::channel::ChannelId;
use super::priority::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp layout used by the line-oriented sinks.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// A message that passed its logger's priority filter and is waiting for,
/// or has reached, its channel's sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub channel: ChannelId,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

impl Message {
    pub fn new(channel: impl Into<ChannelId>, priority: Priority, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            priority,
            timestamp: Utc::now(),
            text: text.into(),
            thread_name: std::thread::current().name().map(String::from),
        }
    }

    /// Render as a single output line, without the trailing newline.
    ///
    /// Newlines, carriage returns and tabs in the text are escaped so that a
    /// message can never forge additional lines in a stream sink.
    pub fn format_line(&self) -> String {
        format!(
            "[{}] [{:7}] {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.priority,
            self.escaped_text()
        )
    }

    /// The text with newlines, carriage returns and tabs escaped.
    pub fn escaped_text(&self) -> String {
        self.text
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}
