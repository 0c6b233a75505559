//! Logger system settings

use super::error::{LoggerError, Result};
use super::priority::Priority;
use std::time::Duration;

/// Default interval between two drains of the pending queues
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

/// Default number of worker threads
pub const DEFAULT_THREAD_COUNT: usize = 1;

/// Settings applied by [`LoggerSystem::start`](crate::LoggerSystem::start).
///
/// # Example
///
/// ```
/// use channel_logger::{LoggerConfig, Priority};
/// use std::time::Duration;
///
/// let config = LoggerConfig::default()
///     .with_period(Duration::from_millis(10))
///     .with_thread_count(2)
///     .with_min_priority(Priority::Debug);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggerConfig {
    pub period: Duration,
    pub thread_count: usize,
    pub min_priority: Priority,
}

impl LoggerConfig {
    pub fn new(min_priority: Priority, period: Duration, thread_count: usize) -> Self {
        Self {
            period,
            thread_count,
            min_priority,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_thread_count(mut self, thread_count: usize) -> Self {
        self.thread_count = thread_count;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_min_priority(mut self, min_priority: Priority) -> Self {
        self.min_priority = min_priority;
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_period(self.period)?;
        validate_thread_count(self.thread_count)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_PERIOD,
            thread_count: DEFAULT_THREAD_COUNT,
            min_priority: Priority::Info,
        }
    }
}

pub(crate) fn validate_period(period: Duration) -> Result<()> {
    if period.is_zero() {
        return Err(LoggerError::config("period", "must be greater than zero"));
    }
    Ok(())
}

pub(crate) fn validate_thread_count(thread_count: usize) -> Result<()> {
    if thread_count == 0 {
        return Err(LoggerError::config("thread_count", "must be at least 1"));
    }
    Ok(())
}
