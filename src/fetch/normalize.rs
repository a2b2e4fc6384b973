//! JSON-to-table normalization.
//!
//! Accepts the two tabular JSON shapes endpoints actually return (an array
//! of records, or a single record) and flattens nested objects into
//! dotted-path columns (`{"a": {"b": 1}}` becomes column `a.b`). Arrays
//! whose elements are not all objects are rejected outright rather than
//! guessed at, as are scalar roots.

use std::fmt;

use serde_json::Value as Json;

use crate::data::{Table, Value};

/// Why a JSON document could not be normalized into a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// Array elements were not all JSON objects.
    MixedShape,
    /// The root was a scalar (string, number, bool or null).
    ScalarRoot(&'static str),
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::MixedShape => {
                write!(f, "array elements must all be JSON objects")
            }
            NormalizeError::ScalarRoot(kind) => {
                write!(f, "JSON root must be an object or an array of objects, got {}", kind)
            }
        }
    }
}

impl std::error::Error for NormalizeError {}

/// Flattens a parsed JSON document into a [`Table`].
///
/// - array of objects: one row per element
/// - single object: one row
/// - empty array: empty table (zero rows, zero columns)
pub fn normalize(root: &Json) -> Result<Table, NormalizeError> {
    match root {
        Json::Array(items) => {
            if items.is_empty() {
                return Ok(Table::empty());
            }
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    Json::Object(map) => records.push(flatten_record(map)),
                    _ => return Err(NormalizeError::MixedShape),
                }
            }
            Ok(Table::from_records(records))
        }
        Json::Object(map) => Ok(Table::from_records([flatten_record(map)])),
        Json::Null => Err(NormalizeError::ScalarRoot("null")),
        Json::Bool(_) => Err(NormalizeError::ScalarRoot("a boolean")),
        Json::Number(_) => Err(NormalizeError::ScalarRoot("a number")),
        Json::String(_) => Err(NormalizeError::ScalarRoot("a string")),
    }
}

/// One record as (dotted path, cell) pairs, keys in document order.
fn flatten_record(map: &serde_json::Map<String, Json>) -> Vec<(String, Value)> {
    let mut cells = Vec::with_capacity(map.len());
    for (key, value) in map {
        flatten_into(key, value, &mut cells);
    }
    cells
}

fn flatten_into(path: &str, value: &Json, cells: &mut Vec<(String, Value)>) {
    match value {
        Json::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}.{}", path, key), nested, cells);
            }
        }
        // Nested arrays stay opaque: carried as their JSON text.
        Json::Array(_) => cells.push((path.to_string(), Value::Str(value.to_string()))),
        scalar => {
            if let Some(cell) = Value::from_json_scalar(scalar) {
                cells.push((path.to_string(), cell));
            }
        }
    }
}
