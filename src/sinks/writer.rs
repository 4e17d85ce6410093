//! Sink over any caller-supplied writer

use crate::core::OutputSink;
use parking_lot::Mutex;
use std::io::{self, Write};

/// Adapts an `io::Write` into an output sink.
///
/// The writer sits behind a mutex; each record is written with `write_all`
/// and flushed, so buffered writers do not hold records back.
///
/// # Examples
///
/// ```
/// use telemetry::WriterSink;
///
/// let sink = WriterSink::new(Vec::new());
/// assert_eq!(sink.into_inner(), Vec::<u8>::new());
/// ```
pub struct WriterSink<W: Write + Send> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> OutputSink for WriterSink<W> {
    fn write(&self, record: &[u8]) -> io::Result<usize> {
        let mut writer = self.writer.lock();
        writer.write_all(record)?;
        writer.flush()?;
        Ok(record.len())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
