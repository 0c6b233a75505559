//! Logger system metrics
//!
//! Counters describing what happened to completed messages: how many were
//! queued, delivered, discarded for lack of a binding, or lost to sink failures.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger system observability
///
/// # Example
///
/// ```
/// use channel_logger::SystemMetrics;
///
/// let metrics = SystemMetrics::new();
/// metrics.record_submitted();
/// metrics.record_delivered();
///
/// assert_eq!(metrics.submitted(), 1);
/// assert_eq!(metrics.delivered(), 1);
/// ```
#[derive(Debug)]
pub struct SystemMetrics {
    /// Messages handed to a channel queue
    submitted: AtomicU64,

    /// Completions suppressed by a logger's threshold
    filtered: AtomicU64,

    /// Messages written to a sink
    delivered: AtomicU64,

    /// Messages drained from a channel with no binding
    discarded: AtomicU64,

    /// Messages a sink failed to write
    write_failures: AtomicU64,

    /// Drain passes performed by workers and by stop()
    drains: AtomicU64,
}

impl SystemMetrics {
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            drains: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn discarded(&self) -> u64 {
        self.discarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn drains(&self) -> u64 {
        self.drains.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_discarded(&self, count: u64) -> u64 {
        self.discarded.fetch_add(count, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_drain(&self) -> u64 {
        self.drains.fetch_add(1, Ordering::Relaxed)
    }

    /// Messages submitted but not yet delivered, discarded or failed.
    pub fn in_flight(&self) -> u64 {
        self.submitted()
            .saturating_sub(self.delivered() + self.discarded() + self.write_failures())
    }

    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.drains.store(0, Ordering::Relaxed);
    }
}

impl Default for SystemMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SystemMetrics {
    /// Snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            submitted: AtomicU64::new(self.submitted()),
            filtered: AtomicU64::new(self.filtered()),
            delivered: AtomicU64::new(self.delivered()),
            discarded: AtomicU64::new(self.discarded()),
            write_failures: AtomicU64::new(self.write_failures()),
            drains: AtomicU64::new(self.drains()),
        }
    }
}
