//! File logging example
//!
//! Demonstrates routing channels to a log file and to the console.
//!
//! Run with: cargo run --example file_logging

use channel_logger::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Channel Logger - File Logging Example ===\n");

    let system = LoggerSystem::instance();
    system.set_output("app", Output::owned(FileSink::open("application.log")?));
    system.set_output("console", Output::owned(ConsoleSink::new()));

    {
        let config = LoggerConfig::default()
            .with_min_priority(Priority::Debug)
            .with_period(Duration::from_millis(20));
        let _guard = LoggerSystemGuard::new(config)?;

        let mut app = Logger::with_channel("app");
        let mut console = Logger::with_channel("console");

        console.push("Writing to application.log").push(end());
        app.push("Application started").push(end());
        app.push(debug()).push("Loading configuration...").push(end());

        for i in 1..=5 {
            app.push(info()).push("Processing item ").push(i).push("/5").push(end());
            if i == 3 {
                app.push(warning()).push("Item 3 took longer than expected").push(end());
            }
        }

        // Rebinding closes the file; later messages go to the console.
        system.set_output("app", Output::owned(ConsoleSink::new()));
        app.push(info()).push("All operations completed").push(end());
    }

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the file output");

    Ok(())
}
