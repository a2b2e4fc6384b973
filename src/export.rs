//! CSV serialization of the consolidated table.

use std::fmt;
use std::io;
use std::path::Path;

use tracing::info;

use crate::data::Table;

/// Default name of the exported file.
pub const EXPORT_FILE_NAME: &str = "consolidated_data.csv";

/// Failure while writing CSV output.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Csv(csv::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Csv(e) => write!(f, "CSV error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Io(e) => Some(e),
            ExportError::Csv(e) => Some(e),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(e: csv::Error) -> Self {
        ExportError::Csv(e)
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        ExportError::Io(e)
    }
}

/// Serializes `table` as UTF-8 CSV: header row of column names, one line
/// per row, comma separated, no index column. Null cells render empty.
/// Deterministic for a given table; a table with no columns yields an
/// empty string.
pub fn to_csv_string(table: &Table) -> Result<String, ExportError> {
    if table.n_cols() == 0 {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    // The writer only ever received UTF-8 strings.
    String::from_utf8(bytes)
        .map_err(|e| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Writes the CSV rendition of `table` to `path`.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), ExportError> {
    let csv = to_csv_string(table)?;
    std::fs::write(path, csv)?;
    info!(path = %path.display(), rows = table.n_rows(), "exported CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Table, Value, sample_table};

    fn read_back(csv_text: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        let headers = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (headers, rows)
    }

    #[test]
    fn test_round_trip() {
        let table = sample_table();
        let csv_text = to_csv_string(&table).unwrap();
        let (headers, rows) = read_back(&csv_text);

        assert_eq!(headers, table.columns);
        assert_eq!(rows.len(), table.n_rows());
        for (parsed, original) in rows.iter().zip(&table.rows) {
            let rendered: Vec<String> = original.iter().map(|c| c.to_string()).collect();
            assert_eq!(parsed, &rendered);
        }
    }

    #[test]
    fn test_header_plus_one_line_per_row() {
        let mut table = Table::with_columns(["a", "b"]);
        table.push_row(vec![Value::Int(1), Value::Int(2)]);
        table.push_row(vec![Value::Int(3), Value::Int(4)]);

        let csv_text = to_csv_string(&table).unwrap();
        let lines: Vec<&str> = csv_text.lines().collect();
        assert_eq!(lines, vec!["a,b", "1,2", "3,4"]);
    }

    #[test]
    fn test_null_cells_render_empty() {
        let mut table = Table::with_columns(["a", "b"]);
        table.push_row(vec![Value::Null, Value::Str("x".to_string())]);

        let csv_text = to_csv_string(&table).unwrap();
        assert_eq!(csv_text.lines().nth(1), Some(",x"));
    }

    #[test]
    fn test_empty_table_yields_empty_output() {
        assert_eq!(to_csv_string(&Table::empty()).unwrap(), "");
    }

    #[test]
    fn test_write_csv_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);

        write_csv(&sample_table(), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Agency,Metric,Year,Value"));
        assert_eq!(contents.lines().count(), 6);
    }
}
