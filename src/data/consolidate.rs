//! Row-wise consolidation of fetched tables.

use super::{Table, Value};

/// Merges tables into one by concatenating rows in input order.
///
/// - no tables: an empty table (no rows, no columns)
/// - one table: returned unchanged
/// - several: rows of the first table, then the second, and so on; the
///   column set is the union of all inputs in first-seen order, and cells
///   absent from a source table are `Null`
///
/// Deterministic for a given input sequence; the relative order of rows
/// within each source table is preserved.
pub fn consolidate(tables: Vec<Table>) -> Table {
    if tables.len() <= 1 {
        return tables.into_iter().next().unwrap_or_else(Table::empty);
    }

    let mut columns: Vec<String> = Vec::new();
    for table in &tables {
        for column in &table.columns {
            if !columns.iter().any(|c| c == column) {
                columns.push(column.clone());
            }
        }
    }

    let mut merged = Table::with_columns(columns);
    for table in tables {
        // Where each output column lives in this source table, if anywhere.
        let mapping: Vec<Option<usize>> = merged
            .columns
            .iter()
            .map(|column| table.column_index(column))
            .collect();

        for row in table.rows {
            let cells = mapping
                .iter()
                .map(|slot| match slot {
                    Some(i) => row.get(*i).cloned().unwrap_or(Value::Null),
                    None => Value::Null,
                })
                .collect();
            merged.rows.push(cells);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_ab(values: &[(i64, i64)]) -> Table {
        let mut t = Table::with_columns(["a", "b"]);
        for (a, b) in values {
            t.push_row(vec![Value::Int(*a), Value::Int(*b)]);
        }
        t
    }

    #[test]
    fn test_consolidate_empty_input() {
        let merged = consolidate(vec![]);
        assert_eq!(merged.n_rows(), 0);
        assert_eq!(merged.n_cols(), 0);
    }

    #[test]
    fn test_consolidate_identity() {
        let table = table_ab(&[(1, 2), (3, 4)]);
        assert_eq!(consolidate(vec![table.clone()]), table);
    }

    #[test]
    fn test_consolidate_row_count_and_column_union() {
        let first = table_ab(&[(1, 2), (3, 4)]);
        let mut second = Table::with_columns(["b", "c"]);
        second.push_row(vec![Value::Int(5), Value::Str("x".to_string())]);

        let merged = consolidate(vec![first.clone(), second.clone()]);
        assert_eq!(merged.n_rows(), first.n_rows() + second.n_rows());
        assert_eq!(merged.columns, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_consolidate_preserves_row_order() {
        let first = table_ab(&[(1, 2), (3, 4)]);
        let second = table_ab(&[(5, 6)]);
        let merged = consolidate(vec![first.clone(), second.clone()]);

        for (k, row) in first.rows.iter().enumerate() {
            assert_eq!(&merged.rows[k], row);
        }
        assert_eq!(&merged.rows[first.n_rows()], &second.rows[0]);
    }

    #[test]
    fn test_consolidate_fills_missing_cells_with_null() {
        let first = table_ab(&[(1, 2)]);
        let mut second = Table::with_columns(["c"]);
        second.push_row(vec![Value::Int(9)]);

        let merged = consolidate(vec![first, second]);
        assert_eq!(merged.rows[0], vec![Value::Int(1), Value::Int(2), Value::Null]);
        assert_eq!(merged.rows[1], vec![Value::Null, Value::Null, Value::Int(9)]);
    }

    #[test]
    fn test_consolidate_repeated_runs_are_deterministic() {
        let inputs = vec![table_ab(&[(1, 2)]), table_ab(&[(3, 4)])];
        assert_eq!(consolidate(inputs.clone()), consolidate(inputs));
    }
}
