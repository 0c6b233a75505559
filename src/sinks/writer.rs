//! Sink over any byte stream

use crate::core::{Message, Result, Sink};
use std::io::Write;

/// Writes one formatted line per message to an [`io::Write`](std::io::Write).
///
/// # Example
///
/// ```
/// use channel_logger::prelude::*;
/// use channel_logger::sinks::WriterSink;
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write(&Message::new("net", Priority::Warning, "slow peer"))?;
/// let text = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(text.ends_with("[WARNING] slow peer\n"));
/// # Ok::<(), LoggerError>(())
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named(writer, "writer")
    }

    pub fn named(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&mut self, message: &Message) -> Result<()> {
        let mut line = message.format_line();
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
