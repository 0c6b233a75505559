//! Basic logger usage example
//!
//! Demonstrates guard-scoped startup, priority manipulators and the console sink.
//!
//! Run with: cargo run --example basic_usage

use channel_logger::prelude::*;
use channel_logger::warning;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Channel Logger - Basic Usage Example ===\n");

    let config = LoggerConfig::new(Priority::Info, Duration::from_millis(50), 2);
    let _guard = LoggerSystemGuard::new(config)?;

    let system = LoggerSystem::instance();
    system.set_output(DEFAULT_CHANNEL, Output::owned(ConsoleSink::new()));
    system.set_output("net", Output::owned(ConsoleSink::with_colors(false)));

    println!("1. Logging at different priorities (threshold INFO):");
    let mut logger = Logger::new();
    logger.push(debug()).push("This debug message is filtered").push(end());
    logger.push(info()).push("This is an info message").push(end());
    logger.push(warning()).push("This is a warning message").push(end());
    logger.push(error()).push("This is an error message").push(end());

    println!("2. Priority is checked on completion, not while writing:");
    logger.push("Raised after the text was written").push(warning()).push(end());
    logger.push("Discarded before completion").push(reset()).push(end());

    println!("3. Named channels and macros:");
    let mut net = Logger::with_channel("net");
    net.push("connected to ").push("10.0.0.7").push(':').push(443).push(end());
    warning!(channel: "net", "retrying in {}ms", 250);

    std::thread::sleep(Duration::from_millis(100));
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
