//! HTTP transport via reqwest
//!
//! One client per transport; the base URL and timeout come from the
//! [`ClientConfig`] it was built with.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{Transport, TransportError};
use crate::config::ClientConfig;

#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, TransportError> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn apply_headers(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request = request.header(ACCEPT, "application/json");
        for (key, value) in &self.config.headers {
            request = request.header(key, value);
        }
        request
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::Client(err.to_string())
    } else if err.is_decode() {
        TransportError::MalformedJson(err.to_string())
    } else {
        TransportError::Unreachable(err.to_string())
    }
}

fn oversized(len: u64, limit: u64) -> TransportError {
    TransportError::MalformedJson(format!(
        "response body of {} bytes exceeds the {} byte limit",
        len, limit
    ))
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.config.resolve_url(path);
        let start = std::time::Instant::now();

        debug!("Executing GET {}", url);

        let request = self.apply_headers(self.client.get(&url));
        let response = request.send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            classify(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} -> {}", url, status.as_u16());
            return Err(TransportError::Status {
                status: status.as_u16(),
                url,
            });
        }

        // Content-Length is advisory; chunked bodies are checked after reading
        let limit = self.config.max_body_bytes;
        if let Some(len) = response.content_length().filter(|len| *len > limit) {
            warn!("GET {} body of {} bytes exceeds limit", url, len);
            return Err(oversized(len, limit));
        }

        let body_text = response.text().await.map_err(classify)?;
        if body_text.len() as u64 > limit {
            warn!("GET {} body of {} bytes exceeds limit", url, body_text.len());
            return Err(oversized(body_text.len() as u64, limit));
        }
        let body: Value = serde_json::from_str(&body_text).map_err(|e| {
            warn!("GET {} returned non-JSON body: {}", url, e);
            TransportError::MalformedJson(e.to_string())
        })?;

        info!(
            "GET {} -> {} ({}ms)",
            url,
            status.as_u16(),
            start.elapsed().as_millis()
        );

        Ok(body)
    }
}
