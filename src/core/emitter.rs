//! Single-record logging entry point

use super::{
    diagnostics::Diagnostics,
    error::{Result, TelemetryError},
    formatter::{format_record, Record},
    level::Level,
    metadata::{FieldValue, Metadata},
    settings::Settings,
    sink::{OutputSink, SharedSink},
};
use crate::sinks::{ConsoleSink, FileSink};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A sink bound together with a level, metadata, content and settings.
///
/// Every builder method takes `&self` and returns a new `Emitter`, so a base
/// emitter can be reused freely: deriving `base.error()` never changes what
/// `base` or any earlier derived emitter will write. Clones are cheap; the
/// sink, settings, metadata and content are shared until one is replaced.
///
/// # Example
///
/// ```
/// use telemetry::{Emitter, MemorySink, Metadata};
///
/// let sink = MemorySink::new();
/// let base = Emitter::new(sink.clone()).with_field("service", "billing");
///
/// base.error().log("payment declined");
/// base.info().log("retry scheduled");
///
/// let written = sink.contents_string();
/// assert!(written.contains("ERROR service:billing payment declined\n"));
/// assert!(written.contains("INFO service:billing retry scheduled\n"));
/// ```
#[derive(Clone)]
pub struct Emitter {
    sink: SharedSink,
    level: Level,
    metadata: Arc<Metadata>,
    content: Arc<[u8]>,
    settings: Arc<Settings>,
    diagnostics: Diagnostics,
}

impl Emitter {
    /// Create an emitter writing to `sink`, with no level and default settings
    pub fn new<S: OutputSink + 'static>(sink: S) -> Self {
        Self::from_shared(Arc::new(sink))
    }

    /// Create an emitter over a sink that is already shared
    pub fn from_shared(sink: SharedSink) -> Self {
        Self {
            sink,
            level: Level::NoLevel,
            metadata: Arc::new(Metadata::new()),
            content: Arc::from(Vec::new()),
            settings: Arc::new(Settings::default()),
            diagnostics: Diagnostics::stderr(),
        }
    }

    /// Create an emitter appending to the file at `path`
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(FileSink::open(path)?))
    }

    /// Create an emitter writing to standard output
    pub fn stdout() -> Self {
        Self::new(ConsoleSink::stdout())
    }

    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        Self {
            level,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn no_level(&self) -> Self {
        self.with_level(Level::NoLevel)
    }

    #[must_use]
    pub fn error(&self) -> Self {
        self.with_level(Level::Error)
    }

    #[must_use]
    pub fn warn(&self) -> Self {
        self.with_level(Level::Warn)
    }

    #[must_use]
    pub fn info(&self) -> Self {
        self.with_level(Level::Info)
    }

    #[must_use]
    pub fn debug(&self) -> Self {
        self.with_level(Level::Debug)
    }

    /// Replace the metadata
    #[must_use]
    pub fn with_metadata(&self, metadata: Metadata) -> Self {
        Self {
            metadata: Arc::new(metadata),
            ..self.clone()
        }
    }

    /// Add one metadata field on top of the current metadata
    #[must_use]
    pub fn with_field<K, V>(&self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut next = self.clone();
        Arc::make_mut(&mut next.metadata).insert(key, value);
        next
    }

    #[must_use]
    pub fn with_content(&self, content: impl Into<Vec<u8>>) -> Self {
        Self {
            content: Arc::from(content.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_settings(&self, settings: impl Into<Arc<Settings>>) -> Self {
        Self {
            settings: settings.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_diagnostics(&self, diagnostics: Diagnostics) -> Self {
        Self {
            diagnostics,
            ..self.clone()
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The bytes `emit` would write right now
    pub fn render(&self) -> Vec<u8> {
        let record = Record::new(&self.level, &self.metadata, &self.content);
        format_record(&self.settings, &record)
    }

    /// Write the record and return the sink's error instead of reporting it
    pub fn try_emit(&self) -> Result<usize> {
        let record = self.render();
        self.sink
            .write(&record)
            .map_err(|e| TelemetryError::sink_write(self.sink.name(), e))
    }

    /// Write the record with a single sink call.
    ///
    /// Never fails and never panics: a sink error (or a panicking sink) is
    /// reported on the diagnostic channel.
    pub fn emit(&self) {
        let record = self.render();
        deliver(
            self.sink.as_ref(),
            &record,
            &self.level,
            &self.content,
            &self.diagnostics,
        );
    }

    /// Set the content and emit in one call
    pub fn log(&self, content: impl Into<Vec<u8>>) {
        self.with_content(content).emit();
    }
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("sink", &self.sink.name())
            .field("level", &self.level)
            .field("metadata", &self.metadata)
            .field("content", &String::from_utf8_lossy(&self.content))
            .field("settings", &self.settings)
            .finish()
    }
}

/// Hand one record to a sink, isolating the caller from sink errors and panics.
///
/// Returns `true` when the sink accepted the record.
pub(crate) fn deliver(
    sink: &dyn OutputSink,
    record: &[u8],
    level: &Level,
    content: &[u8],
    diagnostics: &Diagnostics,
) -> bool {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.write(record)));

    match result {
        Ok(Ok(_)) => true,
        Ok(Err(e)) => {
            diagnostics.write_failure(sink.name(), level, content, &e);
            false
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            diagnostics.write_failure(
                sink.name(),
                level,
                content,
                &format!("sink panicked: {}", panic_msg),
            );
            false
        }
    }
}
