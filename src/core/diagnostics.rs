//! Diagnostic side-channel for failures inside the logging path
//!
//! Logging never fails the caller. When a sink rejects a record or a
//! configuration source cannot be loaded, a one-line diagnostic is handed to
//! this channel instead. By default it goes to the process error stream, not
//! to the sink that just failed.

use super::level::Level;
use std::fmt;
use std::sync::Arc;

/// Callback receiving diagnostic lines
pub type DiagnosticCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Where diagnostics are delivered
///
/// # Example
///
/// ```
/// use telemetry::Diagnostics;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let diagnostics = Diagnostics::with_callback(Arc::new(move |line: &str| {
///     sink.lock().unwrap().push(line.to_string());
/// }));
///
/// diagnostics.report("disk full");
/// assert_eq!(seen.lock().unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct Diagnostics {
    callback: Option<DiagnosticCallback>,
}

impl Diagnostics {
    /// Report to the process error stream
    pub fn stderr() -> Self {
        Self { callback: None }
    }

    pub fn with_callback(callback: DiagnosticCallback) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    pub fn report(&self, message: &str) {
        match self.callback {
            Some(ref callback) => callback(message),
            None => eprintln!("[LOGGER ERROR] {}", message),
        }
    }

    /// Report a record that a sink refused to accept
    pub(crate) fn write_failure(
        &self,
        sink: &str,
        level: &Level,
        content: &[u8],
        error: &dyn fmt::Display,
    ) {
        self.report(&format!(
            "failed to write log record (level={}, sink={}): {}: {}",
            level.type_tag(),
            sink,
            String::from_utf8_lossy(content),
            error
        ));
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
