//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity tag attached to every record.
///
/// The predefined levels render as fixed uppercase tags. `NoLevel` renders as
/// an empty tag, and `Custom` carries an arbitrary caller-defined tag.
///
/// Serialized levels are plain tag strings and deserialize through `FromStr`.
/// A custom tag spelling a predefined name (`Custom("info")`) therefore comes
/// back as the predefined level (`Info`) and renders uppercased.
///
/// # Examples
///
/// ```
/// use telemetry::Level;
///
/// assert_eq!(Level::Warn.type_tag(), "WARN");
/// assert_eq!(Level::custom("CRITICAL").type_tag(), "CRITICAL");
/// assert_eq!(Level::NoLevel.type_tag(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    #[default]
    NoLevel,
    Error,
    Warn,
    Info,
    Debug,
    Custom(String),
}

impl Level {
    /// Create a caller-defined level
    pub fn custom(tag: impl Into<String>) -> Self {
        Level::Custom(tag.into())
    }

    /// The display tag written into formatted records
    pub fn type_tag(&self) -> &str {
        match self {
            Level::NoLevel => "",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Custom(tag) => tag,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Level::Custom(_))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl FromStr for Level {
    type Err = std::convert::Infallible;

    /// Predefined tags match case-insensitively; anything else becomes `Custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "" => Level::NoLevel,
            "ERROR" => Level::Error,
            "WARN" | "WARNING" => Level::Warn,
            "INFO" => Level::Info,
            "DEBUG" => Level::Debug,
            _ => Level::Custom(s.to_string()),
        })
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        match level {
            Level::Custom(tag) => tag,
            other => other.type_tag().to_string(),
        }
    }
}
