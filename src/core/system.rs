//! Process-wide logger system: channel bindings, pending queues and the
//! worker pool that drains them.

use super::{
    channel::ChannelId,
    config::{validate_period, validate_thread_count, LoggerConfig},
    error::{LoggerError, Result},
    message::Message,
    metrics::SystemMetrics,
    priority::Priority,
    sink::Output,
};
use crossbeam_channel::{select, tick, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

/// Fallback diagnostic target for failures inside the system.
///
/// Receives the channel the failure belongs to, if any, and the error.
pub type ErrorHandler = Arc<dyn Fn(Option<&ChannelId>, &LoggerError) + Send + Sync>;

type Slot = Arc<Mutex<Option<Output>>>;

static INSTANCE: OnceLock<LoggerSystem> = OnceLock::new();

/// State shared between the system handle and its workers.
struct Shared {
    queues: Mutex<HashMap<ChannelId, VecDeque<Message>>>,
    bindings: Mutex<HashMap<ChannelId, Slot>>,
    metrics: SystemMetrics,
    error_handler: RwLock<Option<ErrorHandler>>,
}

struct Settings {
    configured: LoggerConfig,
    /// Settings the running workers were started with
    active: Option<LoggerConfig>,
}

struct Workers {
    handles: Vec<thread::JoinHandle<()>>,
    shutdown: Sender<()>,
}

/// Registry of channel outputs plus the worker pool delivering to them.
///
/// Most programs use the global [`LoggerSystem::instance`], usually through a
/// [`LoggerSystemGuard`](crate::LoggerSystemGuard). Standalone systems created
/// with [`LoggerSystem::new`] are stopped and release their outputs on drop.
///
/// # Example
///
/// ```
/// use channel_logger::prelude::*;
/// use parking_lot::Mutex;
/// use std::sync::Arc;
///
/// let system = LoggerSystem::new();
/// let sink = Arc::new(Mutex::new(MemorySink::new()));
/// system.set_output("net", Output::shared(&sink));
/// system.start();
///
/// Logger::builder().channel("net").build_on(&system).push("connected").push(end());
///
/// system.stop();
/// assert_eq!(sink.lock().texts(), vec!["connected"]);
/// ```
pub struct LoggerSystem {
    shared: Arc<Shared>,
    settings: RwLock<Settings>,
    lifecycle: Mutex<Option<Workers>>,
    guarded: AtomicBool,
}

impl LoggerSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoggerConfig::default())
    }

    /// Create a stopped system with pre-validated settings.
    pub fn with_config(config: LoggerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                queues: Mutex::new(HashMap::new()),
                bindings: Mutex::new(HashMap::new()),
                metrics: SystemMetrics::new(),
                error_handler: RwLock::new(None),
            }),
            settings: RwLock::new(Settings {
                configured: config,
                active: None,
            }),
            lifecycle: Mutex::new(None),
            guarded: AtomicBool::new(false),
        }
    }

    /// The process-wide system, created on first access.
    ///
    /// The global system lives in a static and is never dropped, so its own
    /// teardown never runs. Messages still queued when the process exits are
    /// lost unless something stops it first, typically a
    /// [`LoggerSystemGuard`](crate::LoggerSystemGuard) held for the life of
    /// `main`.
    pub fn instance() -> &'static LoggerSystem {
        INSTANCE.get_or_init(LoggerSystem::new)
    }

    pub fn period(&self) -> Duration {
        self.settings.read().configured.period
    }

    /// Set the drain period used from the next start on.
    pub fn set_period(&self, period: Duration) -> Result<()> {
        validate_period(period)?;
        self.settings.write().configured.period = period;
        Ok(())
    }

    pub fn thread_count(&self) -> usize {
        self.settings.read().configured.thread_count
    }

    /// Set the worker count used from the next start on.
    ///
    /// Zero is rejected and leaves the current value in place.
    pub fn set_thread_count(&self, thread_count: usize) -> Result<()> {
        validate_thread_count(thread_count)?;
        self.settings.write().configured.thread_count = thread_count;
        Ok(())
    }

    pub fn min_priority(&self) -> Priority {
        self.settings.read().configured.min_priority
    }

    pub fn set_min_priority(&self, min_priority: Priority) {
        self.settings.write().configured.min_priority = min_priority;
    }

    /// Replace all settings at once; nothing changes if any value is invalid.
    pub fn configure(&self, config: LoggerConfig) -> Result<()> {
        config.validate()?;
        self.settings.write().configured = config;
        Ok(())
    }

    pub fn config(&self) -> LoggerConfig {
        self.settings.read().configured
    }

    /// Threshold inherited by loggers created now.
    ///
    /// While running this is the value the system was started with; changes
    /// made since only apply after the next (re)start.
    pub fn effective_min_priority(&self) -> Priority {
        let settings = self.settings.read();
        settings
            .active
            .map_or(settings.configured.min_priority, |active| active.min_priority)
    }

    pub fn is_running(&self) -> bool {
        self.settings.read().active.is_some()
    }

    /// Start the worker pool.
    ///
    /// When already running, restarts only if the settings changed since the
    /// last start. Returns whether a start or restart happened.
    pub fn start(&self) -> bool {
        let mut lifecycle = self.lifecycle.lock();
        let config = {
            let settings = self.settings.read();
            if lifecycle.is_some() && settings.active == Some(settings.configured) {
                return false;
            }
            settings.configured
        };

        if lifecycle.is_some() {
            self.stop_locked(&mut lifecycle);
        }

        match self.spawn_workers(config) {
            Ok(workers) => {
                *lifecycle = Some(workers);
                self.settings.write().active = Some(config);
                true
            }
            Err(err) => {
                drop(lifecycle);
                self.shared.report(None, &err);
                false
            }
        }
    }

    /// Stop the worker pool after delivering every pending message.
    ///
    /// Returns false if the system was not running.
    pub fn stop(&self) -> bool {
        let mut lifecycle = self.lifecycle.lock();
        self.stop_locked(&mut lifecycle)
    }

    fn stop_locked(&self, lifecycle: &mut Option<Workers>) -> bool {
        let Some(workers) = lifecycle.take() else {
            return false;
        };

        // Disconnecting the channel wakes every worker for its final drain.
        drop(workers.shutdown);
        for handle in workers.handles {
            let name = handle.thread().name().unwrap_or("worker").to_string();
            if let Err(payload) = handle.join() {
                let err = LoggerError::sink_panicked(name, panic_message(payload.as_ref()));
                self.shared.report(None, &err);
            }
        }

        self.shared.drain(|_| true);
        self.settings.write().active = None;
        true
    }

    fn spawn_workers(&self, config: LoggerConfig) -> Result<Workers> {
        let (shutdown, signal) = crossbeam_channel::bounded::<()>(0);
        let mut handles = Vec::with_capacity(config.thread_count);

        for shard in 0..config.thread_count {
            let shared = Arc::clone(&self.shared);
            let signal = signal.clone();
            let spawned = thread::Builder::new()
                .name(format!("logger-worker-{}", shard))
                .spawn(move || {
                    run_worker(&shared, shard, config.thread_count, config.period, signal)
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    drop(shutdown);
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(LoggerError::io_operation(
                        "starting logger workers",
                        format!("could not spawn worker {}", shard),
                        source,
                    ));
                }
            }
        }

        Ok(Workers { handles, shutdown })
    }

    /// Bind `id` to `output`, releasing any previous output first.
    ///
    /// The previous output is flushed, and destroyed if it was owned, while the
    /// binding table is locked, so no worker can write through it afterwards.
    pub fn set_output(&self, id: impl Into<ChannelId>, output: Output) {
        let id = id.into();
        let failure = {
            let mut bindings = self.shared.bindings.lock();
            let slot = bindings.entry(id.clone()).or_default();
            let mut current = slot.lock();
            let failure = current.take().and_then(release);
            *current = Some(output);
            failure
        };
        if let Some(err) = failure {
            self.shared.report(Some(&id), &err);
        }
    }

    /// Remove the binding for `id`; later messages on it are discarded.
    ///
    /// Returns whether a binding existed.
    pub fn clear_output(&self, id: impl AsRef<str>) -> bool {
        let (id, previous) = {
            let mut bindings = self.shared.bindings.lock();
            let Some((id, slot)) = bindings.remove_entry(id.as_ref()) else {
                return false;
            };
            let mut current = slot.lock();
            let previous = current.take();
            (id, previous.map(release))
        };
        match previous {
            Some(failure) => {
                if let Some(err) = failure {
                    self.shared.report(Some(&id), &err);
                }
                true
            }
            None => false,
        }
    }

    /// Number of channels with messages waiting to be drained.
    pub fn pending_channels(&self) -> usize {
        self.shared.queues.lock().len()
    }

    pub fn has_output(&self, id: impl AsRef<str>) -> bool {
        self.shared
            .bindings
            .lock()
            .get(id.as_ref())
            .is_some_and(|slot| slot.lock().is_some())
    }

    /// Install a fallback target for sink and worker failures.
    ///
    /// With no handler, failures are printed to stderr. The handler runs with
    /// no binding or queue lock held, so it may rebind, clear or query
    /// outputs. It must not call [`start`](Self::start) or
    /// [`stop`](Self::stop).
    pub fn set_error_handler(&self, handler: Option<ErrorHandler>) {
        *self.shared.error_handler.write() = handler;
    }

    /// Queue a completed message on its channel.
    pub fn submit(&self, message: Message) {
        self.shared.metrics.record_submitted();
        self.shared
            .queues
            .lock()
            .entry(message.channel.clone())
            .or_default()
            .push_back(message);
    }

    /// Number of messages queued but not yet drained.
    pub fn pending_count(&self) -> usize {
        self.shared.queues.lock().values().map(VecDeque::len).sum()
    }

    pub fn metrics(&self) -> &SystemMetrics {
        &self.shared.metrics
    }

    pub(crate) fn try_acquire_guard(&self) -> bool {
        self.guarded
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    pub(crate) fn release_guard(&self) {
        self.guarded.store(false, Ordering::Release);
    }
}

impl Default for LoggerSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LoggerSystem {
    fn drop(&mut self) {
        self.stop();

        let slots: Vec<(ChannelId, Slot)> = self.shared.bindings.lock().drain().collect();
        for (id, slot) in slots {
            let failure = slot.lock().take().and_then(release);
            if let Some(err) = failure {
                self.shared.report(Some(&id), &err);
            }
        }
    }
}

fn run_worker(
    shared: &Shared,
    shard: usize,
    shards: usize,
    period: Duration,
    shutdown: Receiver<()>,
) {
    let ticker = tick(period);
    let owns = |id: &ChannelId| id.shard(shards) == shard;

    loop {
        select! {
            recv(ticker) -> _ => shared.drain(owns),
            recv(shutdown) -> _ => {
                shared.drain(owns);
                break;
            }
        }
    }
}

impl Shared {
    /// Take every non-empty queue selected by `owns` and deliver it.
    fn drain(&self, owns: impl Fn(&ChannelId) -> bool) {
        let batches: Vec<(ChannelId, VecDeque<Message>)> = {
            let mut queues = self.queues.lock();
            let batches: Vec<_> = queues
                .iter_mut()
                .filter(|(id, queue)| !queue.is_empty() && owns(*id))
                .map(|(id, queue)| (id.clone(), std::mem::take(queue)))
                .collect();
            queues.retain(|_, queue| !queue.is_empty());
            batches
        };

        self.metrics.record_drain();
        for (id, batch) in batches {
            for err in self.deliver(&id, batch) {
                self.report(Some(&id), &err);
            }
        }
    }

    /// Write a batch through the channel's binding.
    ///
    /// Failures are returned rather than reported so the handler never runs
    /// while the slot is locked.
    fn deliver(&self, id: &ChannelId, batch: VecDeque<Message>) -> Vec<LoggerError> {
        let slot = self.bindings.lock().get(id).cloned();
        let Some(slot) = slot else {
            self.metrics.record_discarded(batch.len() as u64);
            return Vec::new();
        };

        let mut current = slot.lock();
        let Some(output) = current.as_mut() else {
            self.metrics.record_discarded(batch.len() as u64);
            return Vec::new();
        };

        let mut failures = Vec::new();
        for message in &batch {
            match isolate(output, |output| output.write(message)) {
                Ok(()) => {
                    self.metrics.record_delivered();
                }
                Err(err) => {
                    self.metrics.record_write_failure();
                    failures.push(err);
                }
            }
        }

        if let Err(err) = isolate(output, Output::flush) {
            failures.push(err);
        }
        failures
    }

    fn report(&self, id: Option<&ChannelId>, err: &LoggerError) {
        if let Some(handler) = self.error_handler.read().as_ref() {
            handler(id, err);
            return;
        }
        match id {
            Some(id) => eprintln!("[LOGGER ERROR] Output for channel '{}' failed: {}", id, err),
            None => eprintln!("[LOGGER ERROR] {}", err),
        }
    }
}

/// Flush an output that is leaving its binding, then drop it.
fn release(mut output: Output) -> Option<LoggerError> {
    isolate(&mut output, Output::flush).err()
}

/// Run a sink operation, turning a panic into an error.
fn isolate(output: &mut Output, op: impl FnOnce(&mut Output) -> Result<()>) -> Result<()> {
    match panic::catch_unwind(AssertUnwindSafe(|| op(output))) {
        Ok(result) => result,
        Err(payload) => Err(LoggerError::sink_panicked(
            output.name(),
            panic_message(payload.as_ref()),
        )),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
