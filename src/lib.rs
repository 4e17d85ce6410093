//! # Telemetry
//!
//! A structured logging core: leveled, metadata-tagged messages are turned
//! into line-oriented text records and written to a pluggable sink.
//!
//! ## Features
//!
//! - **Emitters**: immutable builders binding a sink, level, metadata and content
//! - **Transactions**: batches of records flushed once, in order, each to its own sink
//! - **Sinks**: file, console, any `io::Write`, or your own `OutputSink`
//! - **Never fails the caller**: write failures go to a diagnostic side-channel
//!
//! ## Example
//!
//! ```
//! use telemetry::prelude::*;
//!
//! let sink = MemorySink::new();
//! let out = Emitter::new(sink.clone());
//!
//! out.error().log("HELLO");
//!
//! let mut tx = Transaction::begin();
//! tx.append(&out.info().with_content("something is going on"));
//! tx.append(&out.warn().with_content("and then it stopped"));
//! tx.flush();
//!
//! assert_eq!(sink.write_count(), 3);
//! ```

pub mod config;
pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{SectionConfig, TelemetryConfig};
    pub use crate::core::{
        CommitOutcome, Diagnostics, Emitter, FieldValue, Level, Metadata, OutputSink, Result,
        Settings, TelemetryError, TimestampFormat, Transaction, TransactionId,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::config::{FormattingConfig, SectionConfig, TelemetryConfig};
pub use crate::core::{
    format_record, format_record_at, CommitOutcome, DiagnosticCallback, Diagnostics, Emitter,
    FieldOrder, FieldValue, Level, Metadata, OutputSink, Record, RecordField, Result, Settings,
    SharedSink, TelemetryError, TimestampFormat, Transaction, TransactionId,
    DEFAULT_TIMESTAMP_PATTERN,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
