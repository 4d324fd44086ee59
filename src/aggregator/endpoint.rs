use serde::{Deserialize, Serialize};

use crate::model::EndpointKind;

/// One backend path polled independently, and the shape it normalizes into
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointSpec {
    /// Unique within one load
    pub id: String,
    pub path: String,
    pub kind: EndpointKind,
}

impl EndpointSpec {
    pub fn new(id: impl Into<String>, path: impl Into<String>, kind: EndpointKind) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            kind,
        }
    }

    /// Root endpoint, carries the architecture label
    pub fn system_status() -> Self {
        Self::new("status", "/", EndpointKind::SystemStatus)
    }

    /// `/health` read as a plain status panel
    pub fn health_status() -> Self {
        Self::new("status", "/health", EndpointKind::SystemStatus)
    }

    /// `/health` read with its component breakdown
    pub fn health() -> Self {
        Self::new("health", "/health", EndpointKind::Health)
    }

    /// `/status` lists every platform component as a bare string
    pub fn detailed_status() -> Self {
        Self::new("components", "/status", EndpointKind::Health)
    }

    pub fn workflows() -> Self {
        Self::new("workflows", "/api/v1/workflows", EndpointKind::Workflows)
    }

    /// Legacy flow listing used by the single-page dashboard
    pub fn flows() -> Self {
        Self::new("flows", "/flows", EndpointKind::Workflows)
    }
}
