#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nxg_status::{ClientConfig, Transport, TransportError};
use serde_json::{json, Value};
use wiremock::MockServer;

/// Closed port on loopback; connections are refused immediately
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:9";

#[derive(Clone)]
enum Reply {
    Json(Value),
    Fail(TransportError),
}

/// In-process transport answering from a fixed route table
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    routes: HashMap<String, (Duration, Reply)>,
    calls: Arc<AtomicUsize>,
    completed: Arc<AtomicUsize>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, body: Value) -> Self {
        self.respond_after(path, Duration::ZERO, body)
    }

    pub fn respond_after(mut self, path: &str, delay: Duration, body: Value) -> Self {
        self.routes
            .insert(path.to_string(), (delay, Reply::Json(body)));
        self
    }

    pub fn fail(self, path: &str, err: TransportError) -> Self {
        self.fail_after(path, Duration::ZERO, err)
    }

    pub fn fail_after(mut self, path: &str, delay: Duration, err: TransportError) -> Self {
        self.routes.insert(path.to_string(), (delay, Reply::Fail(err)));
        self
    }

    /// Requests started
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests that ran to the end of their delay
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn fetch(&self, path: &str) -> Result<Value, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let Some((delay, reply)) = self.routes.get(path).cloned() else {
            return Err(TransportError::Status {
                status: 404,
                url: path.to_string(),
            });
        };

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);

        match reply {
            Reply::Json(body) => Ok(body),
            Reply::Fail(err) => Err(err),
        }
    }
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(server.uri())
        .with_timeout(2000)
}

pub fn unreachable_config() -> ClientConfig {
    ClientConfig::default()
        .with_base_url(UNREACHABLE_URL)
        .with_timeout(2000)
}

pub fn root_payload() -> Value {
    json!({
        "platform": "ZQAutoNXG",
        "version": "6.0.0",
        "architecture": "G V2 NovaBase",
        "status": "operational",
        "timestamp": 1736535600.5
    })
}

pub fn health_payload() -> Value {
    json!({"status": "healthy", "version": "6.0.0", "platform": "ZQAutoNXG"})
}

pub fn degraded_health_payload() -> Value {
    json!({
        "status": "degraded",
        "components": {
            "db": "healthy",
            "cache": {"status": "error", "message": "timeout"}
        }
    })
}

pub fn workflows_payload() -> Value {
    json!([
        {
            "id": 1,
            "name": "Lead enrichment",
            "status": "published",
            "nodes": [{"id": "a"}, {"id": "b"}],
            "edges": [{"id": "e", "source": "a", "target": "b"}]
        },
        {"id": 2}
    ])
}
