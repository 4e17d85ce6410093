//! Immutable formatting settings
//!
//! A `Settings` value is a snapshot: builder methods return a new value and
//! emitters hold it behind an `Arc`, so a settings change never reaches an
//! emitter that was already built.

use super::timestamp::TimestampFormat;
use std::sync::Arc;

/// A segment of a formatted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Timestamp,
    Level,
    Metadata,
    Content,
}

impl RecordField {
    /// Canonical layout: timestamp, level, metadata, content
    pub const CANONICAL: [RecordField; 4] = [
        RecordField::Timestamp,
        RecordField::Level,
        RecordField::Metadata,
        RecordField::Content,
    ];

    /// Name used for this field in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            RecordField::Timestamp => "timestamp",
            RecordField::Level => "level",
            RecordField::Metadata => "metadata",
            RecordField::Content => "content",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        RecordField::CANONICAL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    fn canonical_rank(&self) -> i32 {
        match self {
            RecordField::Timestamp => 0,
            RecordField::Level => 1,
            RecordField::Metadata => 2,
            RecordField::Content => 3,
        }
    }
}

/// Order in which record fields are rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOrder {
    fields: [RecordField; 4],
}

impl Default for FieldOrder {
    fn default() -> Self {
        Self {
            fields: RecordField::CANONICAL,
        }
    }
}

impl FieldOrder {
    /// Build an order from explicit ranks; fields without a rank keep their
    /// canonical rank (0 to 3) and ties keep canonical order.
    pub fn from_ranks<I>(ranks: I) -> Self
    where
        I: IntoIterator<Item = (RecordField, i32)>,
    {
        let ranks: Vec<(RecordField, i32)> = ranks.into_iter().collect();
        let rank_of = |field: &RecordField| {
            ranks
                .iter()
                .rev()
                .find(|(f, _)| f == field)
                .map(|(_, rank)| *rank)
                .unwrap_or_else(|| field.canonical_rank())
        };

        let mut fields = RecordField::CANONICAL;
        fields.sort_by_key(rank_of);
        Self { fields }
    }

    pub fn fields(&self) -> &[RecordField] {
        &self.fields
    }

    pub fn is_canonical(&self) -> bool {
        self.fields == RecordField::CANONICAL
    }
}

/// Formatting configuration consumed by the formatter
///
/// # Examples
///
/// ```
/// use telemetry::{Settings, TimestampFormat};
///
/// let settings = Settings::new().with_timestamp_pattern("%H:%M:%S");
/// assert_eq!(
///     settings.timestamp_format(),
///     &TimestampFormat::Custom("%H:%M:%S".to_string())
/// );
/// assert!(!settings.formatting_disabled());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    timestamp_format: TimestampFormat,
    formatting_disabled: bool,
    field_order: FieldOrder,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp pattern; an empty pattern selects the default
    #[must_use]
    pub fn with_timestamp_pattern(&self, pattern: &str) -> Self {
        self.with_timestamp_format(TimestampFormat::from_pattern(pattern))
    }

    #[must_use]
    pub fn with_timestamp_format(&self, format: TimestampFormat) -> Self {
        Self {
            timestamp_format: format,
            ..self.clone()
        }
    }

    /// Disable formatting: records become a raw passthrough of the content
    #[must_use]
    pub fn with_formatting_disabled(&self, disabled: bool) -> Self {
        Self {
            formatting_disabled: disabled,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_field_order(&self, order: FieldOrder) -> Self {
        Self {
            field_order: order,
            ..self.clone()
        }
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub fn formatting_disabled(&self) -> bool {
        self.formatting_disabled
    }

    pub fn field_order(&self) -> &FieldOrder {
        &self.field_order
    }

    /// Wrap these settings in an Arc for sharing across emitters
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
