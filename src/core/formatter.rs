//! Record formatting
//!
//! Turns a level, metadata and content into the line-oriented record layout:
//!
//! ```text
//! <timestamp> <level> [<key>:<value> ]*<content>\n
//! ```
//!
//! Transaction records carry a `| TRANSACTION - <id> | ` marker directly
//! after the timestamp. With formatting disabled the content is passed
//! through verbatim, without a trailing newline.

use super::level::Level;
use super::metadata::Metadata;
use super::settings::{RecordField, Settings};
use super::transaction::TransactionId;
use chrono::{DateTime, Local, TimeZone};
use std::fmt;

/// Borrowed view of everything that goes into one record
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: &'a Level,
    pub metadata: &'a Metadata,
    pub content: &'a [u8],
    pub transaction: Option<&'a TransactionId>,
}

impl<'a> Record<'a> {
    pub fn new(level: &'a Level, metadata: &'a Metadata, content: &'a [u8]) -> Self {
        Self {
            level,
            metadata,
            content,
            transaction: None,
        }
    }

    #[must_use]
    pub fn in_transaction(mut self, id: &'a TransactionId) -> Self {
        self.transaction = Some(id);
        self
    }
}

/// Format a record stamped with the current local time
pub fn format_record(settings: &Settings, record: &Record<'_>) -> Vec<u8> {
    format_record_at(settings, record, &Local::now())
}

/// Format a record stamped with the given time
pub fn format_record_at<Tz: TimeZone>(
    settings: &Settings,
    record: &Record<'_>,
    at: &DateTime<Tz>,
) -> Vec<u8>
where
    Tz::Offset: fmt::Display,
{
    if settings.formatting_disabled() {
        return record.content.to_vec();
    }

    let fields = settings.field_order().fields();
    let mut out = Vec::with_capacity(64 + record.content.len());

    for (idx, field) in fields.iter().enumerate() {
        match field {
            RecordField::Timestamp => {
                out.extend_from_slice(settings.timestamp_format().format(at).as_bytes());
                out.push(b' ');
                if let Some(id) = record.transaction {
                    out.extend_from_slice(format!("| TRANSACTION - {} | ", id).as_bytes());
                }
            }
            RecordField::Level => {
                out.extend_from_slice(record.level.type_tag().as_bytes());
                out.push(b' ');
            }
            RecordField::Metadata => {
                let mut pairs = String::new();
                record.metadata.write_pairs(&mut pairs);
                out.extend_from_slice(pairs.as_bytes());
            }
            RecordField::Content => {
                out.extend_from_slice(record.content);
                if idx + 1 < fields.len() {
                    out.push(b' ');
                }
            }
        }
    }

    out.push(b'\n');
    out
}
