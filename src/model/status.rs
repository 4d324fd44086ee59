//! System status and status classification

use serde::Serialize;

pub const DEFAULT_STATUS: &str = "connecting";
pub const DEFAULT_VERSION: &str = "6.0.0";
pub const DEFAULT_PLATFORM: &str = "ZQAutoNXG";
pub const DEFAULT_ARCHITECTURE: &str = "G V2 NovaBase";

/// Coarse classification of a free-text status label, used for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Healthy,
    Degraded,
    Error,
    Unknown,
}

impl StatusLevel {
    pub fn classify(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "healthy" | "operational" | "ok" | "ready" | "active" | "up" => StatusLevel::Healthy,
            "degraded" | "warning" | "configured" => StatusLevel::Degraded,
            "error" | "unhealthy" | "unavailable" | "failed" | "down" | "inactive" => {
                StatusLevel::Error
            }
            _ => StatusLevel::Unknown,
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, StatusLevel::Healthy)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StatusLevel::Healthy => "✓",
            StatusLevel::Degraded => "!",
            StatusLevel::Error => "✗",
            StatusLevel::Unknown => "●",
        }
    }
}

/// Whether the backend answered at all.
///
/// This is separate from any status the backend reports about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Reachability::Reachable)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub reachability: Reachability,
    pub status: String,
    pub version: String,
    pub platform: String,
    pub architecture: Option<String>,
}

impl SystemStatus {
    /// Placeholder shown while the backend cannot be reached
    pub fn unreachable() -> Self {
        Self {
            reachability: Reachability::Unreachable,
            status: DEFAULT_STATUS.to_string(),
            version: DEFAULT_VERSION.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            architecture: None,
        }
    }

    pub fn level(&self) -> StatusLevel {
        StatusLevel::classify(&self.status)
    }

    pub fn architecture_label(&self) -> &str {
        self.architecture.as_deref().unwrap_or(DEFAULT_ARCHITECTURE)
    }
}
