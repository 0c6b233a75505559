//! Tests against the process-wide logger system
//!
//! All tests here share `LoggerSystem::instance()`, so they take a common
//! lock and leave the system stopped with no outputs bound.

use channel_logger::prelude::*;
use channel_logger::{info, warning};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

static GLOBAL: Mutex<()> = parking_lot::const_mutex(());

fn wait_for(sink: &Arc<Mutex<MemorySink>>, count: usize) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if sink.lock().len() >= count {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    false
}

#[test]
fn test_instance_is_shared() {
    let _lock = GLOBAL.lock();
    assert!(std::ptr::eq(LoggerSystem::instance(), LoggerSystem::instance()));
}

#[test]
fn test_guarded_end_to_end() {
    let _lock = GLOBAL.lock();
    let system = LoggerSystem::instance();
    let net = Arc::new(Mutex::new(MemorySink::new()));
    let default = Arc::new(Mutex::new(MemorySink::new()));

    {
        let config = LoggerConfig::new(Priority::Info, Duration::from_millis(10), 2);
        let _guard = LoggerSystemGuard::new(config).expect("guard");
        system.set_output("net", Output::shared(&net));
        system.set_output(DEFAULT_CHANNEL, Output::shared(&default));

        let mut logger = Logger::with_channel("net");
        logger.push("connected").push(end());

        assert!(wait_for(&net, 1));
        assert_eq!(net.lock().contents(), "connected");
        assert!(default.lock().is_empty());
    }

    assert!(!system.is_running());
    system.clear_output("net");
    system.clear_output(DEFAULT_CHANNEL);
}

#[test]
fn test_deferred_guard_and_macros() {
    let _lock = GLOBAL.lock();
    let system = LoggerSystem::instance();
    let sink = Arc::new(Mutex::new(MemorySink::new()));

    {
        let config = LoggerConfig::new(Priority::Warning, Duration::from_millis(10), 1);
        let guard = LoggerSystemGuard::deferred(config).expect("guard");
        assert!(!system.is_running());
        system.set_output(DEFAULT_CHANNEL, Output::shared(&sink));

        assert!(!info!("below threshold"));
        assert!(warning!("disk at {}%", 93));
        assert!(guard.start());

        let mut logger = Logger::new();
        logger.push(error()).push("after start").push(end());
    }

    assert_eq!(sink.lock().texts(), vec!["disk at 93%", "after start"]);
    system.clear_output(DEFAULT_CHANNEL);
}

#[test]
fn test_only_one_guard_at_a_time() {
    let _lock = GLOBAL.lock();

    let first = LoggerSystemGuard::deferred(LoggerConfig::default()).expect("guard");
    assert!(matches!(
        LoggerSystemGuard::new(LoggerConfig::default()),
        Err(LoggerError::GuardActive)
    ));
    drop(first);

    let second = LoggerSystemGuard::deferred(LoggerConfig::default());
    assert!(second.is_ok());
}
