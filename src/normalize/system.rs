use serde_json::Value;

use super::text_field;
use crate::model::status::{DEFAULT_PLATFORM, DEFAULT_STATUS, DEFAULT_VERSION};
use crate::model::{Reachability, SystemStatus};

pub fn system_status(raw: Option<&Value>) -> SystemStatus {
    let Some(raw) = raw else {
        return SystemStatus::unreachable();
    };

    let mut status = SystemStatus {
        reachability: Reachability::Reachable,
        status: DEFAULT_STATUS.to_string(),
        version: DEFAULT_VERSION.to_string(),
        platform: DEFAULT_PLATFORM.to_string(),
        architecture: None,
    };

    match raw {
        Value::Object(map) => {
            if let Some(s) = text_field(map, "status") {
                status.status = s;
            }
            if let Some(v) = text_field(map, "version") {
                status.version = v;
            }
            if let Some(p) = text_field(map, "platform") {
                status.platform = p;
            }
            status.architecture = text_field(map, "architecture");
        }
        // Some probes answer with a bare label
        Value::String(s) if !s.trim().is_empty() => status.status = s.clone(),
        _ => {}
    }

    status
}
