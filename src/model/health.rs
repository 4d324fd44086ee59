//! Health report with per-component status

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::status::{Reachability, StatusLevel, DEFAULT_PLATFORM, DEFAULT_VERSION};

pub const UNKNOWN_STATUS: &str = "unknown";
pub const ERROR_STATUS: &str = "error";
pub const UNREACHABLE_MESSAGE: &str = "Failed to connect to backend";

/// Health of one component, in whichever shape the backend sent it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ComponentHealth {
    /// `"db": "healthy"`
    Bare(String),

    /// `"cache": {"status": "error", "message": "timeout", "details": {...}}`
    Structured {
        status: String,
        message: Option<String>,
        details: Option<Value>,
    },
}

impl ComponentHealth {
    pub fn status(&self) -> &str {
        match self {
            ComponentHealth::Bare(status) => status,
            ComponentHealth::Structured { status, .. } => status,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ComponentHealth::Bare(_) => None,
            ComponentHealth::Structured { message, .. } => message.as_deref(),
        }
    }

    pub fn details(&self) -> Option<&Value> {
        match self {
            ComponentHealth::Bare(_) => None,
            ComponentHealth::Structured { details, .. } => details.as_ref(),
        }
    }

    pub fn level(&self) -> StatusLevel {
        StatusLevel::classify(self.status())
    }

    /// Flatten either shape into the common display row
    pub fn to_status(&self, name: &str) -> ComponentStatus {
        ComponentStatus {
            name: name.to_string(),
            status: self.status().to_string(),
            level: self.level(),
            message: self.message().map(str::to_string),
            details: self.details().cloned(),
        }
    }
}

/// One component row as a presentation layer renders it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentStatus {
    pub name: String,
    pub status: String,
    pub level: StatusLevel,
    pub message: Option<String>,
    pub details: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub reachability: Reachability,
    pub status: String,
    pub platform: String,
    pub version: String,
    /// RFC 3339
    pub timestamp: Option<String>,
    pub message: Option<String>,
    pub components: BTreeMap<String, ComponentHealth>,
    /// Payload as received, for a raw response view
    pub raw: Value,
}

impl HealthReport {
    pub fn unreachable() -> Self {
        Self {
            reachability: Reachability::Unreachable,
            status: ERROR_STATUS.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            version: DEFAULT_VERSION.to_string(),
            timestamp: None,
            message: Some(UNREACHABLE_MESSAGE.to_string()),
            components: BTreeMap::new(),
            raw: Value::Null,
        }
    }

    pub fn level(&self) -> StatusLevel {
        StatusLevel::classify(&self.status)
    }

    pub fn component(&self, name: &str) -> Option<ComponentStatus> {
        self.components.get(name).map(|c| c.to_status(name))
    }

    /// Component rows ordered by name
    pub fn component_statuses(&self) -> Vec<ComponentStatus> {
        self.components
            .iter()
            .map(|(name, health)| health.to_status(name))
            .collect()
    }

    pub fn formatted_timestamp(&self) -> Option<String> {
        use chrono::{DateTime, Utc};
        self.timestamp.as_ref().map(|ts| {
            if let Ok(dt) = ts.parse::<DateTime<Utc>>() {
                dt.format("%Y-%m-%d %H:%M:%S").to_string()
            } else {
                ts.to_string()
            }
        })
    }
}
