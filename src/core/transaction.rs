//! Batched log transactions
//!
//! A transaction collects emitter snapshots and writes them all in one
//! `flush`, in append order, each to its own sink. It commits once: after
//! the first `flush` (or a `rollback`) further appends are ignored and
//! further flushes write nothing. Neither case is an error.
//!
//! There is no cross-sink atomicity. If one entry's sink fails, the entries
//! before it stay written and the entries after it are still attempted.

use super::{
    diagnostics::Diagnostics,
    emitter::{deliver, Emitter},
    formatter::{format_record, Record},
    metadata::Metadata,
    settings::Settings,
};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// Unique identifier stamped into every record of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Result of a `flush` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Entries were attempted; `failed` of them were rejected by their sink
    Flushed { written: usize, failed: usize },
    /// The transaction had already been committed; nothing was written
    AlreadyCommitted,
}

/// An ordered batch of records flushed together
///
/// # Example
///
/// ```
/// use telemetry::{CommitOutcome, Emitter, MemorySink, Transaction};
///
/// let audit = MemorySink::new();
/// let console = MemorySink::new();
///
/// let mut tx = Transaction::begin();
/// tx.append(&Emitter::new(audit.clone()).info().with_content("debit"));
/// tx.append(&Emitter::new(audit.clone()).info().with_content("credit"));
/// tx.append(&Emitter::new(console.clone()).warn().with_content("slow transfer"));
///
/// assert_eq!(tx.flush(), CommitOutcome::Flushed { written: 3, failed: 0 });
/// assert_eq!(tx.flush(), CommitOutcome::AlreadyCommitted);
/// assert_eq!(audit.write_count(), 2);
/// assert_eq!(console.write_count(), 1);
/// ```
#[derive(Debug)]
pub struct Transaction {
    id: TransactionId,
    metadata: Metadata,
    settings: Arc<Settings>,
    diagnostics: Diagnostics,
    entries: Vec<Emitter>,
    committed: bool,
}

impl Transaction {
    /// Open an empty transaction with a fresh id
    pub fn begin() -> Self {
        Self::begin_with_metadata(Metadata::new())
    }

    /// Open a transaction whose metadata is merged into every entry at flush
    pub fn begin_with_metadata(metadata: Metadata) -> Self {
        Self {
            id: TransactionId::new(),
            metadata,
            settings: Arc::new(Settings::default()),
            diagnostics: Diagnostics::stderr(),
            entries: Vec::new(),
            committed: false,
        }
    }

    /// Settings used to render every entry of this transaction
    #[must_use]
    pub fn with_settings(mut self, settings: impl Into<Arc<Settings>>) -> Self {
        self.settings = settings.into();
        self
    }

    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Number of appended entries; flushing keeps them, rolling back drops them
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Queue a snapshot of `emitter`; ignored once committed
    pub fn append(&mut self, emitter: &Emitter) {
        if !self.committed {
            self.entries.push(emitter.clone());
        }
    }

    /// Write every queued entry, in append order, to its own sink.
    ///
    /// Only the first call writes. Sink failures are reported on each
    /// entry's diagnostic channel and counted in the outcome.
    pub fn flush(&mut self) -> CommitOutcome {
        if self.committed {
            return CommitOutcome::AlreadyCommitted;
        }
        self.committed = true;

        let mut written = 0;
        let mut failed = 0;

        for entry in &self.entries {
            let metadata = self.metadata.merged(entry.metadata());
            let record =
                Record::new(entry.level(), &metadata, entry.content()).in_transaction(&self.id);
            let bytes = format_record(&self.settings, &record);

            if deliver(
                entry.sink().as_ref(),
                &bytes,
                entry.level(),
                entry.content(),
                entry.diagnostics(),
            ) {
                written += 1;
            } else {
                failed += 1;
            }
        }

        if failed > 0 {
            self.diagnostics.report(&format!(
                "transaction {} committed with {} of {} records not written",
                self.id,
                failed,
                written + failed
            ));
        }

        CommitOutcome::Flushed { written, failed }
    }

    /// Close the transaction without writing anything and drop its entries
    pub fn rollback(&mut self) {
        self.committed = true;
        self.entries.clear();
    }
}
