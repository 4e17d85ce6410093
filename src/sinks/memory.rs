//! In-memory sink

use crate::core::OutputSink;
use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Captured {
    bytes: Vec<u8>,
    writes: usize,
}

/// Collects records in memory.
///
/// Clones share the same buffer, so one clone can be handed to an emitter
/// while another inspects what was written.
///
/// # Examples
///
/// ```
/// use telemetry::{Emitter, MemorySink};
///
/// let sink = MemorySink::new();
/// Emitter::new(sink.clone()).info().log("ready");
///
/// assert!(sink.contents_string().ends_with("INFO ready\n"));
/// assert_eq!(sink.write_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    captured: Arc<Mutex<Captured>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Vec<u8> {
        self.captured.lock().bytes.clone()
    }

    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.captured.lock().bytes).into_owned()
    }

    /// Number of `write` calls received
    pub fn write_count(&self) -> usize {
        self.captured.lock().writes
    }

    pub fn clear(&self) {
        let mut captured = self.captured.lock();
        captured.bytes.clear();
        captured.writes = 0;
    }
}

impl OutputSink for MemorySink {
    fn write(&self, record: &[u8]) -> io::Result<usize> {
        let mut captured = self.captured.lock();
        captured.bytes.extend_from_slice(record);
        captured.writes += 1;
        Ok(record.len())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
