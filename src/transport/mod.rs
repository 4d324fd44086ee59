//! Transport to the backend
//!
//! A transport performs exactly one GET per call: no retry, no caching.
//! Every failure mode comes back as a [`TransportError`] value.

use async_trait::async_trait;
use serde_json::Value;

pub mod http;

pub use http::HttpTransport;

/// Why a single fetch did not produce JSON
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Backend unreachable: {0}")]
    Unreachable(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error: {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed JSON: {0}")]
    MalformedJson(String),

    #[error("Client error: {0}")]
    Client(String),
}

impl TransportError {
    /// Short reason suitable for a fallback panel
    pub fn reason(&self) -> String {
        match self {
            TransportError::Unreachable(_) => "could not connect to backend".to_string(),
            TransportError::Timeout => "request timed out".to_string(),
            TransportError::Status { status, .. } => format!("backend returned HTTP {}", status),
            TransportError::MalformedJson(_) => "backend returned invalid JSON".to_string(),
            TransportError::Client(e) => format!("client error: {}", e),
        }
    }
}

/// Read-only access to backend endpoints
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` relative to the configured base URL
    async fn fetch(&self, path: &str) -> Result<Value, TransportError>;
}
