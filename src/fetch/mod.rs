//! Endpoint fetching.
//!
//! The `DataSource` trait is the seam between the pipeline and the network:
//! the production implementation performs one synchronous HTTP GET per
//! call, the mock implementation replays scripted results for tests.

pub mod mock;
mod normalize;

pub use mock::MockSource;
pub use normalize::{NormalizeError, normalize};

use std::fmt;

use tracing::debug;

use crate::data::Table;

/// Query parameters for a fetch, as name/value pairs.
pub type Params = [(String, String)];

/// A source of tabular data addressed by endpoint URL.
///
/// Object-safe so the TUI can hold a `Box<dyn DataSource>` without caring
/// whether it talks to the network or to scripted test data.
pub trait DataSource {
    /// Fetches one endpoint and normalizes the response into a [`Table`].
    ///
    /// Any failure (transport, HTTP status, JSON decoding, shape) is a
    /// [`FetchError`] carrying the endpoint address; the caller decides
    /// whether to continue with other endpoints.
    fn fetch(&self, url: &str, params: &Params) -> Result<Table, FetchError>;
}

/// Why one endpoint failed to produce a table.
#[derive(Debug)]
pub enum FetchError {
    /// Network-level failure (DNS, connect, read).
    Transport { url: String, source: reqwest::Error },
    /// The server answered with a non-success status.
    Status { url: String, status: reqwest::StatusCode },
    /// The body was not valid JSON.
    Decode { url: String, source: serde_json::Error },
    /// The JSON was valid but not tabular.
    Shape { url: String, source: NormalizeError },
}

impl FetchError {
    /// The endpoint address that triggered the error.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Transport { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Shape { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport { url, source } => {
                write!(f, "error fetching {}: {}", url, source)
            }
            FetchError::Status { url, status } => {
                write!(f, "error fetching {}: HTTP status {}", url, status)
            }
            FetchError::Decode { url, source } => {
                write!(f, "error fetching {}: invalid JSON: {}", url, source)
            }
            FetchError::Shape { url, source } => {
                write!(f, "error fetching {}: {}", url, source)
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport { source, .. } => Some(source),
            FetchError::Decode { source, .. } => Some(source),
            FetchError::Shape { source, .. } => Some(source),
            FetchError::Status { .. } => None,
        }
    }
}

/// Production source: one blocking HTTP GET per fetch.
///
/// Deliberately bare: no timeout, no retries, no parallelism. Endpoints
/// are read strictly one at a time in the order the user listed them.
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, url: &str, params: &Params) -> Result<Table, FetchError> {
        debug!(url, "sending GET");

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().map_err(|e| FetchError::Transport {
            url: url.to_string(),
            source: e,
        })?;

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode {
                url: url.to_string(),
                source: e,
            })?;

        normalize(&json).map_err(|e| FetchError::Shape {
            url: url.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_carries_url() {
        let err = FetchError::Status {
            url: "http://example.test/data".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(err.url(), "http://example.test/data");
        let text = err.to_string();
        assert!(text.contains("http://example.test/data"));
        assert!(text.contains("500"));
    }
}
