//! Core table types shared by every pipeline stage.
//!
//! A [`Table`] is an ordered list of column names plus an ordered list of
//! rows. The invariant maintained by all constructors is that every row has
//! exactly one cell per column; fields a source record did not supply are
//! filled with [`Value::Null`]. Stages never mutate a table in place; each
//! produces a new one.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar cell value.
///
/// JSON numbers become `Int` when they are integral and fit `i64`,
/// otherwise `Float`. Anything non-scalar (nested arrays) is carried as its
/// JSON text in a `Str` cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for `Int` and `Float` cells.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Numeric view of the cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Converts a scalar JSON value. Objects and arrays are not scalars and
    /// are handled by the normalizer before this is called.
    pub fn from_json_scalar(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Null => Some(Value::Null),
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::String(s) => Some(Value::Str(s.clone())),
            _ => None,
        }
    }

    /// Total ordering across cell kinds: Null < Bool < numbers < Str.
    ///
    /// `Int` and `Float` compare numerically, so `1` and `1.0` are equal;
    /// `unique` counting and min/max in the summarizer rely on that.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Int(_) | Value::Float(_) => 2,
                Value::Str(_) => 3,
            }
        }

        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (a, b) if a.is_numeric() && b.is_numeric() => {
                // Mixed Int/Float and Float/Float.
                let (x, y) = (a.as_f64().unwrap_or(f64::NAN), b.as_f64().unwrap_or(f64::NAN));
                x.total_cmp(&y)
            }
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

impl fmt::Display for Value {
    /// Text form used for CSV cells and TUI cells. `Null` renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
        }
    }
}

/// An ordered, uniform-schema grid of [`Value`] cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in presentation order.
    pub columns: Vec<String>,
    /// Rows, each exactly `columns.len()` cells long.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Table::default()
    }

    /// A table with the given schema and no rows yet.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row. The row must match the current schema.
    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Builds a table from keyed records: columns are the union of keys in
    /// first-seen order, cells a record did not supply become `Null`.
    pub fn from_records<I>(records: I) -> Table
    where
        I: IntoIterator<Item = Vec<(String, Value)>>,
    {
        let records: Vec<Vec<(String, Value)>> = records.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (key, _) in record {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Table::with_columns(columns);
        for record in records {
            let row = table
                .columns
                .iter()
                .map(|col| {
                    record
                        .iter()
                        .find(|(key, _)| key == col)
                        .map(|(_, value)| value.clone())
                        .unwrap_or(Value::Null)
                })
                .collect();
            table.rows.push(row);
        }
        table
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// A table with no rows is empty, matching the "no data found" check
    /// applied to each endpoint result.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterates the cells of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records_union_and_fill() {
        let table = Table::from_records(vec![
            vec![
                ("a".to_string(), Value::Int(1)),
                ("b".to_string(), Value::Int(2)),
            ],
            vec![
                ("b".to_string(), Value::Int(3)),
                ("c".to_string(), Value::Str("x".to_string())),
            ],
        ]);

        assert_eq!(table.columns, vec!["a", "b", "c"]);
        assert_eq!(table.rows[0], vec![Value::Int(1), Value::Int(2), Value::Null]);
        assert_eq!(
            table.rows[1],
            vec![Value::Null, Value::Int(3), Value::Str("x".to_string())]
        );
    }

    #[test]
    fn test_from_records_empty() {
        let table = Table::from_records(Vec::new());
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_cols(), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn test_value_ordering_within_kind() {
        assert_eq!(Value::Int(1).total_cmp(&Value::Int(2)), Ordering::Less);
        assert_eq!(
            Value::Str("a".to_string()).total_cmp(&Value::Str("b".to_string())),
            Ordering::Less
        );
        assert_eq!(Value::Bool(false).total_cmp(&Value::Bool(true)), Ordering::Less);
    }

    #[test]
    fn test_value_ordering_across_kinds() {
        // Null < Bool < numbers < Str
        assert_eq!(Value::Null.total_cmp(&Value::Bool(false)), Ordering::Less);
        assert_eq!(Value::Bool(true).total_cmp(&Value::Int(0)), Ordering::Less);
        assert_eq!(
            Value::Float(1e9).total_cmp(&Value::Str(String::new())),
            Ordering::Less
        );
    }

    #[test]
    fn test_int_float_compare_numerically() {
        assert_eq!(Value::Int(1).total_cmp(&Value::Float(1.0)), Ordering::Equal);
        assert_eq!(Value::Float(0.5).total_cmp(&Value::Int(1)), Ordering::Less);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Str("ok".to_string()).to_string(), "ok");
    }

    #[test]
    fn test_from_json_scalar_numbers() {
        let int_json: serde_json::Value = serde_json::json!(7);
        let float_json: serde_json::Value = serde_json::json!(2.5);
        assert_eq!(Value::from_json_scalar(&int_json), Some(Value::Int(7)));
        assert_eq!(Value::from_json_scalar(&float_json), Some(Value::Float(2.5)));
        assert_eq!(Value::from_json_scalar(&serde_json::json!(null)), Some(Value::Null));
        assert_eq!(Value::from_json_scalar(&serde_json::json!([1])), None);
    }
}
