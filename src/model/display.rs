use serde::{Deserialize, Serialize};

use super::health::HealthReport;
use super::status::SystemStatus;
use super::workflow::WorkflowSummary;

/// Which display shape an endpoint's payload normalizes into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointKind {
    SystemStatus,
    Health,
    Workflows,
}

/// Normalized, default-filled value for one endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum DisplayModel {
    SystemStatus(SystemStatus),
    Health(HealthReport),
    Workflows(Vec<WorkflowSummary>),
}

impl DisplayModel {
    pub fn kind(&self) -> EndpointKind {
        match self {
            DisplayModel::SystemStatus(_) => EndpointKind::SystemStatus,
            DisplayModel::Health(_) => EndpointKind::Health,
            DisplayModel::Workflows(_) => EndpointKind::Workflows,
        }
    }

    pub fn as_system_status(&self) -> Option<&SystemStatus> {
        match self {
            DisplayModel::SystemStatus(status) => Some(status),
            _ => None,
        }
    }

    pub fn as_health(&self) -> Option<&HealthReport> {
        match self {
            DisplayModel::Health(report) => Some(report),
            _ => None,
        }
    }

    pub fn as_workflows(&self) -> Option<&[WorkflowSummary]> {
        match self {
            DisplayModel::Workflows(list) => Some(list),
            _ => None,
        }
    }
}
