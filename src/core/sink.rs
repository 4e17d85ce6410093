//! Output sink trait for record destinations

use std::io;
use std::sync::Arc;

/// A destination that accepts formatted records.
///
/// `write` receives one complete record per call. Sinks are shared between
/// emitters and threads, so an implementation must serialize concurrent
/// writes itself and never interleave two records.
pub trait OutputSink: Send + Sync {
    fn write(&self, record: &[u8]) -> io::Result<usize>;
    fn name(&self) -> &str;
}

/// Sink handle shared by emitters and transaction entries
pub type SharedSink = Arc<dyn OutputSink>;

impl<S: OutputSink + ?Sized> OutputSink for Arc<S> {
    fn write(&self, record: &[u8]) -> io::Result<usize> {
        (**self).write(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
