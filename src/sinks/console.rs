//! Console sink implementation

use crate::core::OutputSink;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes records to the process console.
///
/// Each record is written under the stream's lock and flushed immediately.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl OutputSink for ConsoleSink {
    fn write(&self, record: &[u8]) -> io::Result<usize> {
        match self.stream {
            Stream::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(record)?;
                out.flush()?;
            }
            Stream::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(record)?;
                out.flush()?;
            }
        }
        Ok(record.len())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}
