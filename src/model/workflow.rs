use std::fmt;

use serde::Serialize;

pub const DEFAULT_WORKFLOW_NAME: &str = "Untitled Workflow";
pub const DEFAULT_WORKFLOW_STATUS: &str = "active";

/// Workflow identifier; the backends use both integer and UUID ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum WorkflowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowId::Number(n) => write!(f, "{}", n),
            WorkflowId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSummary {
    pub id: WorkflowId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub node_count: usize,
    pub edge_count: usize,
}
