//! Timestamp formatting utilities
//!
//! Provides the timestamp segment of a formatted record. Custom formats use
//! chrono's strftime syntax; a malformed custom pattern never panics and
//! renders with the default pattern instead.

use super::error::{Result, TelemetryError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// Pattern used when no timestamp pattern is configured
pub const DEFAULT_TIMESTAMP_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use telemetry::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::default().format(&at), "2025-01-08 10:30:45");
/// assert_eq!(TimestampFormat::from_pattern("%H:%M").format(&at), "10:30");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Date and time to the second: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Build a format from a configured pattern; an empty pattern selects the default
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        if pattern.is_empty() {
            TimestampFormat::DateTime
        } else {
            TimestampFormat::Custom(pattern.to_string())
        }
    }

    /// Format a datetime according to this format
    #[must_use]
    pub fn format<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz::Offset: fmt::Display,
    {
        match self {
            TimestampFormat::DateTime => datetime.format(DEFAULT_TIMESTAMP_PATTERN).to_string(),
            TimestampFormat::Iso8601 => datetime.to_rfc3339_opts(SecondsFormat::Millis, true),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(pattern) => render_pattern(datetime, pattern)
                .unwrap_or_else(|| datetime.format(DEFAULT_TIMESTAMP_PATTERN).to_string()),
        }
    }

    /// Check that a custom pattern only contains recognised specifiers
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(pattern) if !is_valid_pattern(pattern) => {
                Err(TelemetryError::config(
                    "timestamp",
                    format!("invalid strftime pattern '{}'", pattern),
                ))
            }
            _ => Ok(()),
        }
    }
}

fn is_valid_pattern(pattern: &str) -> bool {
    StrftimeItems::new(pattern).all(|item| !matches!(item, Item::Error))
}

fn render_pattern<Tz: TimeZone>(datetime: &DateTime<Tz>, pattern: &str) -> Option<String>
where
    Tz::Offset: fmt::Display,
{
    if !is_valid_pattern(pattern) {
        return None;
    }
    // `to_string` would panic if chrono reports a formatting error
    let mut out = String::new();
    write!(out, "{}", datetime.format(pattern)).ok()?;
    Some(out)
}
