//! The per-action consolidation pipeline.
//!
//! One run is a pure, ordered traversal of the endpoint list: fetch each
//! address in turn, keep the successful non-empty tables, consolidate them.
//! A failing endpoint is reported and skipped; it never aborts the run.
//! Every run starts from scratch; nothing is retained between actions.

use std::fmt;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::data::{Table, consolidate};
use crate::fetch::DataSource;

/// Severity of one user-facing status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One user-facing status message produced during a run.
#[derive(Debug, Clone)]
pub struct StatusEvent {
    pub at: DateTime<Local>,
    pub level: StatusLevel,
    pub message: String,
}

impl StatusEvent {
    /// Stamps a new event with the current local time.
    pub fn new(level: StatusLevel, message: String) -> Self {
        Self {
            at: Local::now(),
            level,
            message,
        }
    }
}

/// Result of a successful run: the consolidated table plus the status
/// trail of every fetch attempt.
#[derive(Debug)]
pub struct PipelineReport {
    pub table: Table,
    pub events: Vec<StatusEvent>,
}

/// A run that produced nothing to consolidate.
#[derive(Debug)]
pub enum PipelineError {
    /// The fetch action was triggered with no addresses supplied.
    EmptyInput,
    /// Every endpoint failed or returned no rows. Carries the status trail
    /// so the failures can still be shown.
    NoData(Vec<StatusEvent>),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::EmptyInput => write!(f, "please input at least one API URL"),
            PipelineError::NoData(_) => write!(f, "no data to consolidate"),
        }
    }
}

impl std::error::Error for PipelineError {}

/// Splits the user's newline-separated endpoint text into addresses,
/// trimming whitespace and dropping blank lines.
pub fn parse_endpoints(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Runs the whole pipeline once: fetch every address in order, one at a
/// time, then consolidate the successful non-empty results.
///
/// Failure isolation: an endpoint that errors or returns no rows
/// contributes zero rows and exactly one warning/error event; the
/// remaining endpoints are still fetched.
pub fn run(source: &dyn DataSource, addresses: &[String]) -> Result<PipelineReport, PipelineError> {
    if addresses.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let mut events = Vec::new();
    let mut tables = Vec::new();

    for address in addresses {
        events.push(StatusEvent::new(
            StatusLevel::Info,
            format!("Fetching data from: {}", address),
        ));

        match source.fetch(address, &[]) {
            Ok(table) if table.is_empty() => {
                warn!(url = %address, "endpoint returned no rows");
                events.push(StatusEvent::new(
                    StatusLevel::Warning,
                    format!("No data found at {}.", address),
                ));
            }
            Ok(table) => {
                info!(url = %address, rows = table.n_rows(), "fetched");
                events.push(StatusEvent::new(
                    StatusLevel::Success,
                    format!("Fetched {} rows from {}.", table.n_rows(), address),
                ));
                tables.push(table);
            }
            Err(e) => {
                warn!(url = %address, error = %e, "fetch failed");
                events.push(StatusEvent::new(StatusLevel::Error, e.to_string()));
            }
        }
    }

    if tables.is_empty() {
        events.push(StatusEvent::new(
            StatusLevel::Warning,
            "No data to consolidate.".to_string(),
        ));
        return Err(PipelineError::NoData(events));
    }

    Ok(PipelineReport {
        table: consolidate(tables),
        events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Table, Value};
    use crate::fetch::MockSource;

    fn one_row(a: i64, b: i64) -> Table {
        let mut t = Table::with_columns(["a", "b"]);
        t.push_row(vec![Value::Int(a), Value::Int(b)]);
        t
    }

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_endpoints() {
        let parsed = parse_endpoints("http://a\n\n  http://b  \n");
        assert_eq!(parsed, vec!["http://a", "http://b"]);
        assert!(parse_endpoints("  \n \n").is_empty());
    }

    #[test]
    fn test_empty_input() {
        let source = MockSource::new();
        assert!(matches!(
            run(&source, &[]),
            Err(PipelineError::EmptyInput)
        ));
    }

    #[test]
    fn test_failure_isolation() {
        let source = MockSource::new()
            .with_table("http://ok1", one_row(1, 2))
            .with_status("http://fail", 500)
            .with_table("http://ok2", one_row(3, 4));

        let report = run(&source, &urls(&["http://ok1", "http://fail", "http://ok2"])).unwrap();

        // Rows of the two working endpoints, in fetch order.
        assert_eq!(report.table.n_rows(), 2);
        assert_eq!(report.table.rows[0], vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(report.table.rows[1], vec![Value::Int(3), Value::Int(4)]);

        // Exactly one error event, naming the failing endpoint.
        let errors: Vec<_> = report
            .events
            .iter()
            .filter(|e| e.level == StatusLevel::Error)
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("http://fail"));
    }

    #[test]
    fn test_two_endpoint_consolidation() {
        let source = MockSource::new()
            .with_table("http://a", one_row(1, 2))
            .with_table("http://b", one_row(3, 4));

        let report = run(&source, &urls(&["http://a", "http://b"])).unwrap();
        assert_eq!(report.table.columns, vec!["a", "b"]);
        assert_eq!(report.table.n_rows(), 2);

        let csv = crate::export::to_csv_string(&report.table).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["a,b", "1,2", "3,4"]);
    }

    #[test]
    fn test_all_endpoints_failed() {
        let source = MockSource::new().with_status("http://fail", 500);
        match run(&source, &urls(&["http://fail"])) {
            Err(PipelineError::NoData(events)) => {
                assert!(events.iter().any(|e| e.level == StatusLevel::Error));
                assert!(
                    events
                        .iter()
                        .any(|e| e.level == StatusLevel::Warning
                            && e.message.contains("No data to consolidate"))
                );
            }
            other => panic!("expected NoData, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_result_is_warning_not_error() {
        let source = MockSource::new()
            .with_table("http://empty", Table::empty())
            .with_table("http://ok", one_row(1, 2));

        let report = run(&source, &urls(&["http://empty", "http://ok"])).unwrap();
        assert_eq!(report.table.n_rows(), 1);
        assert!(
            report
                .events
                .iter()
                .any(|e| e.level == StatusLevel::Warning && e.message.contains("http://empty"))
        );
    }

    #[test]
    fn test_events_follow_fetch_order() {
        let source = MockSource::new()
            .with_table("http://a", one_row(1, 2))
            .with_table("http://b", one_row(3, 4));

        let report = run(&source, &urls(&["http://a", "http://b"])).unwrap();
        let info_messages: Vec<&str> = report
            .events
            .iter()
            .filter(|e| e.level == StatusLevel::Info)
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(
            info_messages,
            vec!["Fetching data from: http://a", "Fetching data from: http://b"]
        );
    }
}
