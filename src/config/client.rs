//! Backend client configuration
//!
//! The base URL is resolved once, either from the environment, a YAML
//! file, or the documented local-development default:
//!
//! ```yaml
//! # nxg-status.yaml
//! base_url: "http://localhost:8000"
//! timeout: 10000
//! max_body_bytes: 4194304
//! headers:
//!   X-Client: dashboard
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Local-development backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Largest response body accepted, in bytes
pub const DEFAULT_MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "NXG_API_URL";

/// Environment variable holding the request timeout in milliseconds
pub const API_TIMEOUT_ENV: &str = "NXG_API_TIMEOUT_MS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },
}

/// Configuration handed to the transport at construction time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL for every endpoint (e.g., "http://localhost:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Responses larger than this are rejected
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: u64,

    /// Static headers sent with every request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_max_body_bytes() -> u64 {
    DEFAULT_MAX_BODY_BYTES
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            max_body_bytes: default_max_body_bytes(),
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Resolve from the process environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary key lookup.
    ///
    /// Missing, blank or unparseable values keep their defaults; this never fails.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(API_URL_ENV) {
            config.base_url = url;
        }

        if let Some(raw) = lookup(API_TIMEOUT_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.timeout = ms,
                Err(_) => tracing::warn!("Ignoring invalid {}={:?}", API_TIMEOUT_ENV, raw),
            }
        }

        config.sanitized()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, file: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a defaulted map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ClientConfig =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Yaml {
                file: file.to_string(),
                error: e,
            })?;
        Ok(config.sanitized())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.sanitized()
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = timeout_ms;
        self.sanitized()
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self.sanitized()
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }

    /// Join `path` onto the base URL with exactly one separating slash
    pub fn resolve_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Blank URLs, a zero timeout and a zero body limit fall back to the defaults
    fn sanitized(mut self) -> Self {
        let trimmed = self.base_url.trim();
        if trimmed.is_empty() {
            self.base_url = default_base_url();
        } else if trimmed.len() != self.base_url.len() {
            self.base_url = trimmed.to_string();
        }

        if self.timeout == 0 {
            self.timeout = default_timeout();
        }

        if self.max_body_bytes == 0 {
            self.max_body_bytes = default_max_body_bytes();
        }

        self
    }
}
