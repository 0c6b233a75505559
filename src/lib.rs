//! # Channel Logger
//!
//! A priority-filtered logging system built around named channels.
//!
//! Messages are composed with a [`Logger`], checked against the logger's
//! threshold when completed, queued per channel, and written to the channel's
//! [`Sink`] by a small pool of worker threads on a fixed period.
//!
//! ## Features
//!
//! - **Deferred filtering**: priority can be raised or lowered until the message is completed
//! - **Per-channel outputs**: bind, rebind or clear a sink per channel at any time
//! - **Ordered delivery**: messages on one channel arrive in completion order
//! - **Safe shutdown**: stopping always drains every pending message first
//!
//! ## Example
//!
//! ```
//! use channel_logger::prelude::*;
//! use parking_lot::Mutex;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let system = LoggerSystem::new();
//! let sink = Arc::new(Mutex::new(MemorySink::new()));
//! system.set_output("net", Output::shared(&sink));
//!
//! {
//!     let config = LoggerConfig::new(Priority::Info, Duration::from_millis(10), 2);
//!     let _guard = LoggerSystemGuard::with_system(&system, config, false)?;
//!
//!     let mut logger = Logger::builder().channel("net").build_on(&system);
//!     logger.push("connected").push(end());
//!     logger.push(debug()).push("handshake details").push(end());
//! }
//!
//! assert_eq!(sink.lock().texts(), vec!["connected"]);
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod manipulators {
    //! Manipulator constructors, for use with [`Logger::push`](crate::Logger::push).
    pub use crate::core::manipulator::{debug, end, error, info, reset, warning, Manipulator};
}

pub mod prelude {
    pub use crate::core::{
        ChannelId, ErrorHandler, LogArg, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerSystem, LoggerSystemGuard, Manipulator, Message, Output, Priority, Result,
        SharedSink, Sink, SystemMetrics, DEFAULT_CHANNEL,
    };
    pub use crate::manipulators::{debug, end, error, info, reset, warning};
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
}

pub use core::{
    ChannelId, ErrorHandler, LogArg, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerSystem, LoggerSystemGuard, Manipulator, Message, Output, Priority, Result, SharedSink,
    Sink, SystemMetrics, DEFAULT_CHANNEL,
};
