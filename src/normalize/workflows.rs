use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::warn;

use super::text_field;
use crate::model::workflow::{DEFAULT_WORKFLOW_NAME, DEFAULT_WORKFLOW_STATUS};
use crate::model::{WorkflowId, WorkflowSummary};

/// Wrapper keys some list endpoints nest the array under
const LIST_KEYS: [&str; 4] = ["workflows", "flows", "items", "data"];

/// Normalize a workflow listing. An unreachable backend yields an empty list;
/// the caller tells the two apart by the endpoint result, not the payload.
///
/// Ids are unique within the returned list, compared by their display form.
/// The first entry for a backend id wins; entries without one get a fallback
/// id that no other entry claims.
pub fn workflow_list(raw: Option<&Value>) -> Vec<WorkflowSummary> {
    let Some(items) = raw.and_then(list_items) else {
        return Vec::new();
    };

    let entries: Vec<(usize, &Map<String, Value>)> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| item.as_object().map(|map| (index, map)))
        .collect();

    // Backend ids are reserved up front so a fallback never takes one that
    // appears later in the list
    let mut taken: HashSet<String> = entries
        .iter()
        .filter_map(|(_, map)| workflow_id(map.get("id")))
        .map(|id| id.to_string())
        .collect();
    let mut emitted = HashSet::new();
    let mut out = Vec::with_capacity(entries.len());

    for (index, map) in entries {
        let id = match workflow_id(map.get("id")) {
            Some(id) => {
                if !emitted.insert(id.to_string()) {
                    warn!("Dropping workflow at position {} with duplicate id {}", index, id);
                    continue;
                }
                id
            }
            None => {
                let id = fallback_id(index, &taken);
                taken.insert(id.to_string());
                id
            }
        };
        out.push(summary(id, map));
    }

    out
}

/// Position in the list, or `#<index>` when a backend id already uses it
fn fallback_id(index: usize, taken: &HashSet<String>) -> WorkflowId {
    let positional = WorkflowId::Number(index as i64);
    if !taken.contains(&positional.to_string()) {
        return positional;
    }

    let mut candidate = format!("#{}", index);
    let mut suffix = 1;
    while taken.contains(&candidate) {
        candidate = format!("#{}-{}", index, suffix);
        suffix += 1;
    }
    WorkflowId::Text(candidate)
}

fn list_items(raw: &Value) -> Option<&Vec<Value>> {
    match raw {
        Value::Array(items) => Some(items),
        Value::Object(map) => LIST_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_array)),
        _ => None,
    }
}

fn summary(id: WorkflowId, map: &Map<String, Value>) -> WorkflowSummary {
    WorkflowSummary {
        id,
        name: text_field(map, "name").unwrap_or_else(|| DEFAULT_WORKFLOW_NAME.to_string()),
        description: text_field(map, "description"),
        status: text_field(map, "status").unwrap_or_else(|| DEFAULT_WORKFLOW_STATUS.to_string()),
        node_count: count(map.get("nodes")),
        edge_count: count(map.get("edges")),
    }
}

fn workflow_id(value: Option<&Value>) -> Option<WorkflowId> {
    match value? {
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => WorkflowId::Number(i),
            None => WorkflowId::Text(n.to_string()),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(WorkflowId::Text(s.clone())),
        _ => None,
    }
}

fn count(value: Option<&Value>) -> usize {
    match value {
        Some(Value::Array(items)) => items.len(),
        Some(Value::Object(map)) => map.len(),
        _ => 0,
    }
}
