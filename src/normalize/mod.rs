//! Response normalization
//!
//! Maps whatever JSON the backend returned into a [`DisplayModel`]. These
//! functions are total: malformed or partial payloads degrade to defaults,
//! and `None` (the transport failed) yields the unreachable placeholder for
//! the requested kind.

use serde_json::{Map, Value};

use crate::model::{DisplayModel, EndpointKind};

pub mod health;
pub mod system;
pub mod workflows;

pub use health::{component_health, health_report};
pub use system::system_status;
pub use workflows::workflow_list;

/// Normalize a raw payload into the display shape for `kind`
pub fn normalize(raw: Option<&Value>, kind: EndpointKind) -> DisplayModel {
    match kind {
        EndpointKind::SystemStatus => DisplayModel::SystemStatus(system_status(raw)),
        EndpointKind::Health => DisplayModel::Health(health_report(raw)),
        EndpointKind::Workflows => DisplayModel::Workflows(workflow_list(raw)),
    }
}

/// Non-blank string or number under `key`
pub(crate) fn text_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(text_value)
}

pub(crate) fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
