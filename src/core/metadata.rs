//! Key-value metadata attached to records
//!
//! Metadata is an unordered map. When rendered into a record the pairs come
//! out in hash-map iteration order, which is not stable between runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Value type for metadata fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Unordered key-value pairs rendered as `key:value ` segments
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    fields: HashMap<String, FieldValue>,
}

impl Metadata {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Add a field, returning the extended metadata
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &HashMap<String, FieldValue> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Combine `self` with `overrides`; on a key collision the value from
    /// `overrides` wins.
    #[must_use]
    pub fn merged(&self, overrides: &Metadata) -> Metadata {
        let mut fields = self.fields.clone();
        for (key, value) in &overrides.fields {
            fields.insert(key.clone(), value.clone());
        }
        Metadata { fields }
    }

    /// Append every pair as `key:value ` (trailing space included)
    pub fn write_pairs(&self, out: &mut String) {
        use std::fmt::Write;
        for (key, value) in &self.fields {
            // Writing into a String cannot fail
            let _ = write!(out, "{}:{} ", key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Metadata
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_pairs(&mut out);
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_creation() {
        let meta = Metadata::new();
        assert!(meta.is_empty());
        assert_eq!(meta.to_string(), "");
    }

    #[test]
    fn test_metadata_with_fields() {
        let meta = Metadata::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true);

        assert_eq!(meta.len(), 3);
        assert_eq!(meta.get("user_id"), Some(&FieldValue::Int(123)));
    }

    #[test]
    fn test_pairs_use_colon_and_trailing_space() {
        let meta = Metadata::new().with_field("something", "clean");
        assert_eq!(meta.to_string(), "something:clean ");

        let meta = Metadata::new()
            .with_field("key1", "value1")
            .with_field("key2", 42);
        let rendered = meta.to_string();
        assert!(rendered.contains("key1:value1 "));
        assert!(rendered.contains("key2:42 "));
        assert_eq!(rendered.len(), "key1:value1 key2:42 ".len());
    }

    #[test]
    fn test_merge_priority() {
        let tx_meta = Metadata::new()
            .with_field("key", "tx_value")
            .with_field("service", "api");
        let entry_meta = Metadata::new().with_field("key", "entry_value");

        let merged = tx_meta.merged(&entry_meta);

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get("key"),
            Some(&FieldValue::String("entry_value".to_string()))
        );
        // The sources are untouched
        assert_eq!(
            tx_meta.get("key"),
            Some(&FieldValue::String("tx_value".to_string()))
        );
    }

    #[test]
    fn test_from_iterator() {
        let meta: Metadata = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.get("b"), Some(&FieldValue::Int(2)));
    }
}
