//! Generic JSON-backed record store.
//!
//! Loads a JSON array of records into memory once at construction and exposes
//! read-only retrieval of the full sequence. Deserialization happens eagerly,
//! so a malformed document or record fails here, before any query runs.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

use crate::error::Result;

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// In-memory store of records of type `T`, loaded from a JSON document.
///
/// Accepts either a top-level JSON array or an object wrapping the array
/// under a `"data"` key. Records keep their document order and are never
/// mutated after loading.
#[derive(Debug)]
pub struct Repository<T> {
    records: Vec<T>,
}

impl<T: DeserializeOwned> Repository<T> {
    /// Load records from a JSON string.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let payload = match value {
            serde_json::Value::Object(mut map) => match map.remove("data") {
                Some(data) => data,
                None => serde_json::Value::Object(map),
            },
            other => other,
        };
        let records: Vec<T> = serde_json::from_value(payload)?;
        Ok(Self { records })
    }

    /// Load records from a JSON file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

impl<T> Repository<T> {
    /// All records, in document order.
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T> From<Vec<T>> for Repository<T> {
    /// Wrap already-deserialized records, keeping their order.
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}
