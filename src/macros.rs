//! Formatting macros for emitters.
//!
//! These macros only build the content with `format!`; writing and error
//! handling are the emitter's.
//!
//! # Examples
//!
//! ```
//! use telemetry::{Emitter, MemorySink};
//! use telemetry::{info, logf, msgf};
//!
//! let sink = MemorySink::new();
//! let out = Emitter::new(sink.clone());
//!
//! // Level comes from the emitter
//! logf!(out.warn(), "disk {}% full", 91);
//!
//! // Level shortcut
//! let port = 8080;
//! info!(out, "listening on port {}", port);
//!
//! // Content only, for queuing in a transaction
//! let queued = msgf!(out.info(), "step {} of {}", 1, 3);
//! assert_eq!(queued.content(), b"step 1 of 3");
//! ```

/// Format the content and emit through the given emitter.
#[macro_export]
macro_rules! logf {
    ($emitter:expr, $($arg:tt)+) => {
        $emitter.log(format!($($arg)+))
    };
}

/// Derive an emitter whose content is the formatted message, without emitting.
#[macro_export]
macro_rules! msgf {
    ($emitter:expr, $($arg:tt)+) => {
        $emitter.with_content(format!($($arg)+))
    };
}

/// Emit a debug-level record.
///
/// # Examples
///
/// ```
/// # use telemetry::Emitter;
/// # let out = Emitter::stdout();
/// use telemetry::debug;
/// debug!(out, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::logf!($emitter.debug(), $($arg)+)
    };
}

/// Emit an info-level record.
#[macro_export]
macro_rules! info {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::logf!($emitter.info(), $($arg)+)
    };
}

/// Emit a warn-level record.
#[macro_export]
macro_rules! warn {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::logf!($emitter.warn(), $($arg)+)
    };
}

/// Emit an error-level record.
///
/// # Examples
///
/// ```
/// # use telemetry::Emitter;
/// # let out = Emitter::stdout();
/// use telemetry::error;
/// error!(out, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($emitter:expr, $($arg:tt)+) => {
        $crate::logf!($emitter.error(), $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Emitter, Level};
    use crate::sinks::MemorySink;

    #[test]
    fn test_logf_macro() {
        let sink = MemorySink::new();
        let out = Emitter::new(sink.clone()).with_level(Level::custom("MAJOR"));
        logf!(out, "Formatted: {}", 42);

        assert!(sink.contents_string().ends_with("MAJOR Formatted: 42\n"));
    }

    #[test]
    fn test_msgf_macro_does_not_emit() {
        let sink = MemorySink::new();
        let out = Emitter::new(sink.clone());
        let queued = msgf!(out.info(), "Items: {}", 100);

        assert_eq!(queued.content(), b"Items: 100");
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn test_level_macros() {
        let sink = MemorySink::new();
        let out = Emitter::new(sink.clone());
        debug!(out, "Count: {}", 5);
        info!(out, "Items: {}", 100);
        warn!(out, "Retry {} of {}", 1, 3);
        error!(out, "Code: {}", 500);

        let written = sink.contents_string();
        assert!(written.contains("DEBUG Count: 5\n"));
        assert!(written.contains("INFO Items: 100\n"));
        assert!(written.contains("WARN Retry 1 of 3\n"));
        assert!(written.contains("ERROR Code: 500\n"));
        assert_eq!(sink.write_count(), 4);
    }
}
