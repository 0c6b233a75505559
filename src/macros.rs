//! Logging macros for one-shot messages.
//!
//! Each macro builds a [`Logger`](crate::Logger), sets the priority, writes
//! the formatted text and completes the message. They evaluate to `true` when
//! the message passed the threshold and was queued.
//!
//! A target can precede the priority or format string:
//!
//! - nothing: default channel of the global system
//! - `channel: <id>,`: named channel of the global system
//! - `on: <&LoggerSystem>,` optionally followed by `channel: <id>,`
//!
//! # Examples
//!
//! ```
//! use channel_logger::prelude::*;
//! use channel_logger::{info, warning};
//!
//! let system = LoggerSystem::new();
//!
//! info!(on: &system, "Server started");
//! let port = 8080;
//! warning!(on: &system, channel: "net", "Port {} already in use", port);
//!
//! assert_eq!(system.pending_count(), 2);
//! ```

/// Log a message with an explicit priority.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let system = LoggerSystem::new();
/// use channel_logger::log;
/// log!(on: &system, Priority::Info, "Simple message");
/// log!(on: &system, channel: "http", Priority::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    (on: $system:expr, channel: $channel:expr, $priority:expr, $($arg:tt)+) => {{
        let mut logger = $crate::Logger::builder()
            .channel($channel)
            .priority($priority)
            .build_on($system);
        let _ = ::std::fmt::Write::write_fmt(&mut logger, format_args!($($arg)+));
        logger.flush()
    }};
    (on: $system:expr, $priority:expr, $($arg:tt)+) => {{
        let mut logger = $crate::Logger::builder()
            .priority($priority)
            .build_on($system);
        let _ = ::std::fmt::Write::write_fmt(&mut logger, format_args!($($arg)+));
        logger.flush()
    }};
    (channel: $channel:expr, $priority:expr, $($arg:tt)+) => {{
        let mut logger = $crate::Logger::builder()
            .channel($channel)
            .priority($priority)
            .build();
        let _ = ::std::fmt::Write::write_fmt(&mut logger, format_args!($($arg)+));
        logger.flush()
    }};
    ($priority:expr, $($arg:tt)+) => {{
        let mut logger = $crate::Logger::builder().priority($priority).build();
        let _ = ::std::fmt::Write::write_fmt(&mut logger, format_args!($($arg)+));
        logger.flush()
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($priority:expr; on: $system:expr, channel: $channel:expr, $($arg:tt)+) => {
        $crate::log!(on: $system, channel: $channel, $priority, $($arg)+)
    };
    ($priority:expr; on: $system:expr, $($arg:tt)+) => {
        $crate::log!(on: $system, $priority, $($arg)+)
    };
    ($priority:expr; channel: $channel:expr, $($arg:tt)+) => {
        $crate::log!(channel: $channel, $priority, $($arg)+)
    };
    ($priority:expr; $($arg:tt)+) => {
        $crate::log!($priority, $($arg)+)
    };
}

/// Log a debug-priority message.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let system = LoggerSystem::new();
/// use channel_logger::debug;
/// debug!(on: &system, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Priority::Debug; $($arg)+)
    };
}

/// Log an info-priority message.
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Priority::Info; $($arg)+)
    };
}

/// Log a warning-priority message.
///
/// # Examples
///
/// ```
/// # use channel_logger::prelude::*;
/// # let system = LoggerSystem::new();
/// use channel_logger::warning;
/// warning!(on: &system, channel: "disk", "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Priority::Warning; $($arg)+)
    };
}

/// Log an error-priority message.
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__log_at!($crate::Priority::Error; $($arg)+)
    };
}
