//! Scripted data source for tests and offline demos.

use std::collections::HashMap;

use crate::data::Table;

use super::{DataSource, FetchError, Params};

/// One scripted reply.
#[derive(Debug, Clone)]
enum Reply {
    Table(Table),
    Status(u16),
}

/// A `DataSource` that replays canned results per endpoint address.
///
/// Endpoints without a script respond like a dead server (HTTP 404), so a
/// test never accidentally touches the network.
#[derive(Debug, Default)]
pub struct MockSource {
    replies: HashMap<String, Reply>,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a successful fetch returning `table`.
    pub fn with_table(mut self, url: &str, table: Table) -> Self {
        self.replies.insert(url.to_string(), Reply::Table(table));
        self
    }

    /// Scripts a failing fetch answering with the given HTTP status.
    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.replies.insert(url.to_string(), Reply::Status(status));
        self
    }
}

impl DataSource for MockSource {
    fn fetch(&self, url: &str, _params: &Params) -> Result<Table, FetchError> {
        match self.replies.get(url) {
            Some(Reply::Table(table)) => Ok(table.clone()),
            Some(Reply::Status(code)) => Err(FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::from_u16(*code)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
            }),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Value, sample_table};

    #[test]
    fn test_mock_returns_scripted_table() {
        let source = MockSource::new().with_table("http://a", sample_table());
        let table = source.fetch("http://a", &[]).unwrap();
        assert_eq!(table.n_rows(), 5);
        assert_eq!(table.rows[0][0], Value::Str("EPA".to_string()));
    }

    #[test]
    fn test_mock_scripted_failure() {
        let source = MockSource::new().with_status("http://b", 500);
        let err = source.fetch("http://b", &[]).unwrap_err();
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_mock_unknown_url_fails() {
        let source = MockSource::new();
        assert!(source.fetch("http://nope", &[]).is_err());
    }
}
