//! Console sink implementation

use crate::core::{Message, Priority, Result, Sink, TIMESTAMP_FORMAT};
use colored::Colorize;

/// Prints messages to stdout, and ERROR messages to stderr.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_line(&self, message: &Message) -> String {
        if !self.use_colors {
            return message.format_line();
        }

        let tag = format!("{:7}", message.priority).color(message.priority.color_code());
        format!(
            "[{}] [{}] {}",
            message.timestamp.format(TIMESTAMP_FORMAT),
            tag,
            message.escaped_text()
        )
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, message: &Message) -> Result<()> {
        let output = self.format_line(message);
        match message.priority {
            Priority::Error => eprintln!("{}", output),
            _ => println!("{}", output),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
