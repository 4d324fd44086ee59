use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::{text_field, text_value};
use crate::model::health::UNKNOWN_STATUS;
use crate::model::status::{DEFAULT_PLATFORM, DEFAULT_VERSION};
use crate::model::{ComponentHealth, HealthReport, Reachability};

pub fn health_report(raw: Option<&Value>) -> HealthReport {
    let Some(raw) = raw else {
        return HealthReport::unreachable();
    };

    let mut report = HealthReport {
        reachability: Reachability::Reachable,
        status: UNKNOWN_STATUS.to_string(),
        platform: DEFAULT_PLATFORM.to_string(),
        version: DEFAULT_VERSION.to_string(),
        timestamp: None,
        message: None,
        components: BTreeMap::new(),
        raw: raw.clone(),
    };

    let Value::Object(map) = raw else {
        if let Some(s) = text_value(raw) {
            report.status = s;
        }
        return report;
    };

    if let Some(s) = text_field(map, "status") {
        report.status = s;
    }
    if let Some(p) = text_field(map, "platform") {
        report.platform = p;
    }
    if let Some(v) = text_field(map, "version") {
        report.version = v;
    }
    report.message = text_field(map, "message");
    report.timestamp = map.get("timestamp").and_then(timestamp);
    report.components = map.get("components").map(components).unwrap_or_default();

    report
}

/// Decode one component entry by inspecting its runtime shape
pub fn component_health(value: &Value) -> ComponentHealth {
    match value {
        Value::String(s) if !s.trim().is_empty() => ComponentHealth::Bare(s.clone()),
        Value::Bool(true) => ComponentHealth::Bare("healthy".to_string()),
        Value::Bool(false) => ComponentHealth::Bare("unhealthy".to_string()),
        Value::Object(map) => structured(map),
        _ => ComponentHealth::Bare(UNKNOWN_STATUS.to_string()),
    }
}

fn structured(map: &Map<String, Value>) -> ComponentHealth {
    let status = match map.get("status") {
        Some(Value::Bool(true)) => "healthy".to_string(),
        Some(Value::Bool(false)) => "unhealthy".to_string(),
        Some(v) => text_value(v).unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        None => UNKNOWN_STATUS.to_string(),
    };

    ComponentHealth::Structured {
        status,
        message: text_field(map, "message"),
        details: map.get("details").filter(|d| !d.is_null()).cloned(),
    }
}

/// Components arrive as a name-keyed object, or as a list of records with a
/// `name` field. The first entry for a name wins.
fn components(value: &Value) -> BTreeMap<String, ComponentHealth> {
    let mut out = BTreeMap::new();

    match value {
        Value::Object(map) => {
            for (name, entry) in map {
                out.insert(name.clone(), component_health(entry));
            }
        }
        Value::Array(items) => {
            for item in items {
                let Some(name) = item.as_object().and_then(|m| text_field(m, "name")) else {
                    continue;
                };
                out.entry(name).or_insert_with(|| component_health(item));
            }
        }
        _ => {}
    }

    out
}

/// RFC 3339 strings pass through; epoch seconds are converted
fn timestamp(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => {
            let secs = n.as_f64()?;
            if !secs.is_finite() {
                return None;
            }
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9) as u32;
            DateTime::<Utc>::from_timestamp(whole as i64, nanos).map(|dt| dt.to_rfc3339())
        }
        _ => None,
    }
}
