//! Loading formatting settings from a configuration source
//!
//! The configuration file is JSON:
//!
//! ```json
//! {
//!   "formatting": {
//!     "log": { "timestamp": "%Y-%m-%d %H:%M:%S", "formatting_disabled": false },
//!     "tx":  { "timestamp": "%H:%M:%S%.3f", "field_order": { "content": 0 } }
//!   }
//! }
//! ```
//!
//! Every field is optional. `log` settings apply to emitters and `tx`
//! settings to transactions. Values can be overridden from the environment
//! with the `TELEMETRY_` prefix.

use crate::core::{
    Diagnostics, FieldOrder, RecordField, Result, Settings, TelemetryError, TimestampFormat,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "TELEMETRY";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub formatting: FormattingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    pub log: SectionConfig,
    pub tx: SectionConfig,
}

/// Formatting options for one kind of output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// strftime pattern; empty selects the default
    pub timestamp: String,
    pub formatting_disabled: bool,
    /// Rank per record field name (`timestamp`, `level`, `metadata`, `content`)
    pub field_order: HashMap<String, i32>,
}

impl SectionConfig {
    /// Convert into an immutable settings snapshot.
    ///
    /// Invalid timestamp patterns and unknown field names are reported on
    /// `diagnostics`; the rest of the section still applies.
    pub fn to_settings(&self, diagnostics: &Diagnostics) -> Settings {
        let mut timestamp_format = TimestampFormat::from_pattern(&self.timestamp);
        if let Err(e) = timestamp_format.validate() {
            diagnostics.report(&format!("{}; using the default timestamp pattern", e));
            timestamp_format = TimestampFormat::default();
        }

        let mut ranks = Vec::with_capacity(self.field_order.len());
        for (name, rank) in &self.field_order {
            match RecordField::from_name(name) {
                Some(field) => ranks.push((field, *rank)),
                None => {
                    let err = TelemetryError::config(
                        "field_order",
                        format!("unknown record field '{}'", name),
                    );
                    diagnostics.report(&err.to_string());
                }
            }
        }

        Settings::new()
            .with_timestamp_format(timestamp_format)
            .with_formatting_disabled(self.formatting_disabled)
            .with_field_order(FieldOrder::from_ranks(ranks))
    }

    fn apply_overrides<F>(&mut self, section: &str, lookup: &F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = format!("{}_{}_TIMESTAMP", ENV_PREFIX, section);
        if let Some(value) = lookup(&key) {
            self.timestamp = value;
        }

        let key = format!("{}_{}_FORMATTING_DISABLED", ENV_PREFIX, section);
        if let Some(value) = lookup(&key) {
            self.formatting_disabled = parse_bool(&value).ok_or_else(|| {
                TelemetryError::config(key, format!("expected a boolean, got '{}'", value))
            })?;
        }

        Ok(())
    }
}

impl TelemetryConfig {
    /// Settings for emitters
    pub fn log_settings(&self, diagnostics: &Diagnostics) -> Settings {
        self.formatting.log.to_settings(diagnostics)
    }

    /// Settings for transactions
    pub fn tx_settings(&self, diagnostics: &Diagnostics) -> Settings {
        self.formatting.tx.to_settings(diagnostics)
    }

    /// Apply `TELEMETRY_*` overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply `TELEMETRY_*` overrides from an arbitrary lookup
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.formatting.log.apply_overrides("LOG", &lookup)?;
        self.formatting.tx.apply_overrides("TX", &lookup)?;
        Ok(self)
    }
}

/// Parse a JSON configuration string
pub fn from_json_str(json: &str) -> Result<TelemetryConfig> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON configuration file
pub fn load(path: impl AsRef<Path>) -> Result<TelemetryConfig> {
    let path = path.as_ref();
    let load_error =
        |message: String| TelemetryError::config_load(path.display().to_string(), message);
    let raw = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| load_error(e.to_string()))
}

/// Load a configuration file, falling back to defaults on any failure.
///
/// The failure is reported on `diagnostics`.
pub fn load_or_default(path: impl AsRef<Path>, diagnostics: &Diagnostics) -> TelemetryConfig {
    match load(path) {
        Ok(config) => config,
        Err(e) => {
            diagnostics.report(&e.to_string());
            TelemetryConfig::default()
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
