//! Core logger types and traits

pub mod channel;
pub mod config;
pub mod error;
pub mod guard;
pub mod logger;
pub mod manipulator;
pub mod message;
pub mod metrics;
pub mod priority;
pub mod sink;
pub mod system;

pub use channel::{ChannelId, DEFAULT_CHANNEL};
pub use config::{LoggerConfig, DEFAULT_PERIOD, DEFAULT_THREAD_COUNT};
pub use error::{LoggerError, Result};
pub use guard::LoggerSystemGuard;
pub use logger::{LogArg, Logger, LoggerBuilder};
pub use manipulator::Manipulator;
pub use message::{Message, TIMESTAMP_FORMAT};
pub use metrics::SystemMetrics;
pub use priority::Priority;
pub use sink::{Output, SharedSink, Sink};
pub use system::{ErrorHandler, LoggerSystem};
