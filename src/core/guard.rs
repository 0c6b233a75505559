//! Scoped ownership of the logger system lifecycle

use super::{
    config::LoggerConfig,
    error::{LoggerError, Result},
    system::LoggerSystem,
};

/// Configures and starts a [`LoggerSystem`], and stops it when dropped.
///
/// Dropping the guard delivers every pending message and joins the workers,
/// whichever way the owning scope is left. Only one guard can own a system at
/// a time; the guard cannot be cloned.
///
/// # Example
///
/// ```
/// use channel_logger::prelude::*;
/// use std::time::Duration;
///
/// let system = LoggerSystem::new();
/// let config = LoggerConfig::default().with_period(Duration::from_millis(10));
/// {
///     let _guard = LoggerSystemGuard::with_system(&system, config, false)?;
///     assert!(system.is_running());
/// }
/// assert!(!system.is_running());
/// # Ok::<(), LoggerError>(())
/// ```
#[must_use = "the system is stopped as soon as the guard is dropped"]
pub struct LoggerSystemGuard<'a> {
    system: &'a LoggerSystem,
}

impl LoggerSystemGuard<'static> {
    /// Configure and start the global system.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_system(LoggerSystem::instance(), config, false)
    }

    /// Configure the global system; call [`start`](Self::start) later.
    pub fn deferred(config: LoggerConfig) -> Result<Self> {
        Self::with_system(LoggerSystem::instance(), config, true)
    }
}

impl<'a> LoggerSystemGuard<'a> {
    pub fn with_system(
        system: &'a LoggerSystem,
        config: LoggerConfig,
        defer_start: bool,
    ) -> Result<Self> {
        config.validate()?;
        if !system.try_acquire_guard() {
            return Err(LoggerError::GuardActive);
        }
        if let Err(err) = system.configure(config) {
            system.release_guard();
            return Err(err);
        }

        let guard = Self { system };
        if !defer_start {
            guard.start();
        }
        Ok(guard)
    }

    /// Start (or restart) the guarded system.
    pub fn start(&self) -> bool {
        self.system.start()
    }

    pub fn system(&self) -> &'a LoggerSystem {
        self.system
    }
}

impl Drop for LoggerSystemGuard<'_> {
    fn drop(&mut self) {
        self.system.stop();
        self.system.release_guard();
    }
}
