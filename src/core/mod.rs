//! Core telemetry types and traits

pub mod diagnostics;
pub mod emitter;
pub mod error;
pub mod formatter;
pub mod level;
pub mod metadata;
pub mod settings;
pub mod sink;
pub mod timestamp;
pub mod transaction;

pub use diagnostics::{DiagnosticCallback, Diagnostics};
pub use emitter::Emitter;
pub use error::{Result, TelemetryError};
pub use formatter::{format_record, format_record_at, Record};
pub use level::Level;
pub use metadata::{FieldValue, Metadata};
pub use settings::{FieldOrder, RecordField, Settings};
pub use sink::{OutputSink, SharedSink};
pub use timestamp::{TimestampFormat, DEFAULT_TIMESTAMP_PATTERN};
pub use transaction::{CommitOutcome, Transaction, TransactionId};
