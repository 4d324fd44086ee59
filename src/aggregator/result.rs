//! Per-endpoint outcome types

use super::endpoint::EndpointSpec;
use crate::model::{DisplayModel, EndpointKind};
use crate::normalize::normalize;
use crate::transport::TransportError;

/// Outcome of one endpoint within one load.
///
/// Moves `Pending -> Ok` or `Pending -> Failed` once and never back.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EndpointResult {
    #[default]
    Pending,
    Ok(DisplayModel),
    Failed(TransportError),
}

impl EndpointResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, EndpointResult::Pending)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, EndpointResult::Ok(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, EndpointResult::Failed(_))
    }

    pub fn model(&self) -> Option<&DisplayModel> {
        match self {
            EndpointResult::Ok(model) => Some(model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&TransportError> {
        match self {
            EndpointResult::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// What a panel should render: the normalized model, or the
    /// unreachable placeholder while pending or after a failure
    pub fn display(&self, kind: EndpointKind) -> DisplayModel {
        match self {
            EndpointResult::Ok(model) => model.clone(),
            EndpointResult::Pending | EndpointResult::Failed(_) => normalize(None, kind),
        }
    }

    pub fn state_label(&self) -> &'static str {
        match self {
            EndpointResult::Pending => "pending",
            EndpointResult::Ok(_) => "ok",
            EndpointResult::Failed(_) => "failed",
        }
    }
}

/// An endpoint's result as soon as it resolves
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointUpdate {
    pub endpoint: EndpointSpec,
    pub result: EndpointResult,
}

/// One result per requested endpoint, in request order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResults {
    entries: Vec<(EndpointSpec, EndpointResult)>,
}

impl LoadResults {
    pub(crate) fn new(entries: Vec<(EndpointSpec, EndpointResult)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, id: &str) -> Option<&EndpointResult> {
        self.entries
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, result)| result)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EndpointSpec, &EndpointResult)> {
        self.entries.iter().map(|(spec, result)| (spec, result))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ok_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_failed()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_pending()).count()
    }
}
