//! Per-column descriptive statistics.
//!
//! Mirrors the familiar describe-and-transpose view: one output row per
//! source column. Numeric columns get mean/std/quartiles; every column gets
//! count, unique, min and max. Never fails, including on mixed-type
//! columns; those are simply treated as non-numeric for the aggregates.

use std::cmp::Ordering;

use super::{Table, Value};

/// Columns of the summary table, in order.
pub const SUMMARY_COLUMNS: [&str; 10] = [
    "column", "count", "unique", "mean", "std", "min", "25%", "50%", "75%", "max",
];

/// Builds the summary table for `table`. An empty input (no rows, no
/// columns) yields an empty summary table.
pub fn summarize(table: &Table) -> Table {
    if table.n_cols() == 0 {
        return Table::empty();
    }

    let mut summary = Table::with_columns(SUMMARY_COLUMNS);
    for (index, name) in table.columns.iter().enumerate() {
        let values: Vec<&Value> = table
            .column_values(index)
            .filter(|v| !v.is_null())
            .collect();
        summary.push_row(column_stats(name, &values));
    }
    summary
}

/// One summary row. `values` holds the column's non-null cells.
fn column_stats(name: &str, values: &[&Value]) -> Vec<Value> {
    let count = values.len();
    let unique = count_unique(values);

    let (min, max) = match minmax(values) {
        Some((lo, hi)) => (lo.clone(), hi.clone()),
        None => (Value::Null, Value::Null),
    };

    // A column is numeric when it has values and all of them are numbers.
    // Mixed-type columns fall through with Null aggregates.
    let numeric: Option<Vec<f64>> = if count > 0 && values.iter().all(|v| v.is_numeric()) {
        Some(values.iter().filter_map(|v| v.as_f64()).collect())
    } else {
        None
    };

    let (mean, std, q25, q50, q75) = match numeric {
        Some(mut xs) => {
            xs.sort_by(f64::total_cmp);
            let mean = xs.iter().sum::<f64>() / xs.len() as f64;
            let std = sample_std(&xs, mean).map(Value::Float).unwrap_or(Value::Null);
            (
                Value::Float(mean),
                std,
                Value::Float(quantile(&xs, 0.25)),
                Value::Float(quantile(&xs, 0.50)),
                Value::Float(quantile(&xs, 0.75)),
            )
        }
        None => (Value::Null, Value::Null, Value::Null, Value::Null, Value::Null),
    };

    vec![
        Value::Str(name.to_string()),
        Value::Int(count as i64),
        Value::Int(unique as i64),
        mean,
        std,
        min,
        q25,
        q50,
        q75,
        max,
    ]
}

/// Distinct values under [`Value::total_cmp`], so `1` and `1.0` count once.
fn count_unique(values: &[&Value]) -> usize {
    let mut sorted: Vec<&Value> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
        .windows(2)
        .filter(|pair| pair[0].total_cmp(pair[1]) != Ordering::Equal)
        .count()
        + usize::from(!sorted.is_empty())
}

/// Sample standard deviation (n − 1 denominator); `None` below 2 values.
fn sample_std(xs: &[f64], mean: f64) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (xs.len() - 1) as f64;
    Some(var.sqrt())
}

/// Linearly interpolated quantile over sorted values. `xs` must be
/// non-empty and sorted ascending.
fn quantile(xs: &[f64], q: f64) -> f64 {
    let pos = q * (xs.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        xs[lo]
    } else {
        xs[lo] + (xs[hi] - xs[lo]) * (pos - lo as f64)
    }
}

/// Smallest and largest value under [`Value::total_cmp`].
fn minmax<'a>(values: &[&'a Value]) -> Option<(&'a Value, &'a Value)> {
    let mut iter = values.iter();
    let first = *iter.next()?;
    let (mut lo, mut hi) = (first, first);
    for &value in iter {
        if value.total_cmp(lo) == Ordering::Less {
            lo = value;
        }
        if value.total_cmp(hi) == Ordering::Greater {
            hi = value;
        }
    }
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_table;

    fn cell<'a>(summary: &'a Table, row: usize, column: &str) -> &'a Value {
        let index = summary.column_index(column).unwrap();
        &summary.rows[row][index]
    }

    #[test]
    fn test_summarize_empty_table() {
        let summary = summarize(&Table::empty());
        assert_eq!(summary.n_rows(), 0);
        assert_eq!(summary.n_cols(), 0);
    }

    #[test]
    fn test_summarize_one_row_per_column() {
        let summary = summarize(&sample_table());
        assert_eq!(summary.n_rows(), 4);
        assert_eq!(summary.columns, SUMMARY_COLUMNS);
        assert_eq!(cell(&summary, 0, "column"), &Value::Str("Agency".to_string()));
    }

    #[test]
    fn test_count_excludes_nulls() {
        let mut table = Table::with_columns(["v"]);
        table.push_row(vec![Value::Int(1)]);
        table.push_row(vec![Value::Null]);
        table.push_row(vec![Value::Int(3)]);

        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "count"), &Value::Int(2));
    }

    #[test]
    fn test_count_equals_rows_without_nulls() {
        let table = sample_table();
        let summary = summarize(&table);
        for row in 0..summary.n_rows() {
            assert_eq!(cell(&summary, row, "count"), &Value::Int(table.n_rows() as i64));
        }
    }

    #[test]
    fn test_numeric_stats() {
        let mut table = Table::with_columns(["v"]);
        for n in [2, 4, 4, 4, 5, 5, 7, 9] {
            table.push_row(vec![Value::Int(n)]);
        }

        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "mean"), &Value::Float(5.0));
        // Sample std of that well-known series: sqrt(32/7).
        match cell(&summary, 0, "std") {
            Value::Float(s) => assert!((s - (32.0f64 / 7.0).sqrt()).abs() < 1e-12),
            other => panic!("expected float std, got {:?}", other),
        }
        assert_eq!(cell(&summary, 0, "min"), &Value::Int(2));
        assert_eq!(cell(&summary, 0, "max"), &Value::Int(9));
        assert_eq!(cell(&summary, 0, "50%"), &Value::Float(4.5));
    }

    #[test]
    fn test_quartiles_interpolate() {
        let mut table = Table::with_columns(["v"]);
        for n in [1, 2, 3, 4] {
            table.push_row(vec![Value::Int(n)]);
        }
        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "25%"), &Value::Float(1.75));
        assert_eq!(cell(&summary, 0, "75%"), &Value::Float(3.25));
    }

    #[test]
    fn test_std_is_null_for_single_value() {
        let mut table = Table::with_columns(["v"]);
        table.push_row(vec![Value::Int(10)]);
        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "std"), &Value::Null);
        assert_eq!(cell(&summary, 0, "mean"), &Value::Float(10.0));
    }

    #[test]
    fn test_mixed_type_column_is_not_numeric() {
        let mut table = Table::with_columns(["v"]);
        table.push_row(vec![Value::Int(1)]);
        table.push_row(vec![Value::Str("two".to_string())]);
        table.push_row(vec![Value::Int(1)]);

        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "mean"), &Value::Null);
        assert_eq!(cell(&summary, 0, "std"), &Value::Null);
        // count/unique/min/max still apply via the total value ordering.
        assert_eq!(cell(&summary, 0, "count"), &Value::Int(3));
        assert_eq!(cell(&summary, 0, "unique"), &Value::Int(2));
        assert_eq!(cell(&summary, 0, "min"), &Value::Int(1));
        assert_eq!(cell(&summary, 0, "max"), &Value::Str("two".to_string()));
    }

    #[test]
    fn test_unique_unifies_int_and_float() {
        let mut table = Table::with_columns(["v"]);
        table.push_row(vec![Value::Int(1)]);
        table.push_row(vec![Value::Float(1.0)]);
        table.push_row(vec![Value::Float(2.5)]);

        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "unique"), &Value::Int(2));
    }

    #[test]
    fn test_all_null_column() {
        let mut table = Table::with_columns(["v"]);
        table.push_row(vec![Value::Null]);
        table.push_row(vec![Value::Null]);

        let summary = summarize(&table);
        assert_eq!(cell(&summary, 0, "count"), &Value::Int(0));
        assert_eq!(cell(&summary, 0, "unique"), &Value::Int(0));
        assert_eq!(cell(&summary, 0, "min"), &Value::Null);
        assert_eq!(cell(&summary, 0, "max"), &Value::Null);
    }
}
