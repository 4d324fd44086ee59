//! Incremental view of an in-flight load
//!
//! Each endpoint gets its own `watch` slot, initially `Pending`, written
//! once by the task fetching it. Dropping the handle aborts every task
//! still in flight; slots that never resolved stay `Pending`.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use uuid::Uuid;

use super::endpoint::EndpointSpec;
use super::result::{EndpointResult, EndpointUpdate, LoadResults};

pub struct LoadHandle {
    load_id: Uuid,
    slots: Vec<(EndpointSpec, watch::Receiver<EndpointResult>)>,
    updates: mpsc::UnboundedReceiver<EndpointUpdate>,
    tasks: JoinSet<()>,
}

impl LoadHandle {
    pub(crate) fn new(
        load_id: Uuid,
        slots: Vec<(EndpointSpec, watch::Receiver<EndpointResult>)>,
        updates: mpsc::UnboundedReceiver<EndpointUpdate>,
        tasks: JoinSet<()>,
    ) -> Self {
        Self {
            load_id,
            slots,
            updates,
            tasks,
        }
    }

    pub fn load_id(&self) -> Uuid {
        self.load_id
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointSpec> {
        self.slots.iter().map(|(spec, _)| spec)
    }

    /// Watch one endpoint's slot. `changed()` errors once the slot can no longer change.
    pub fn subscribe(&self, id: &str) -> Option<watch::Receiver<EndpointResult>> {
        self.slots
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, rx)| rx.clone())
    }

    pub fn current(&self, id: &str) -> Option<EndpointResult> {
        self.slots
            .iter()
            .find(|(spec, _)| spec.id == id)
            .map(|(_, rx)| rx.borrow().clone())
    }

    pub fn snapshot(&self) -> LoadResults {
        LoadResults::new(
            self.slots
                .iter()
                .map(|(spec, rx)| (spec.clone(), rx.borrow().clone()))
                .collect(),
        )
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|(_, rx)| !rx.borrow().is_pending())
    }

    /// Next endpoint to resolve, in resolution order.
    ///
    /// Returns `None` once every endpoint has resolved.
    pub async fn next_update(&mut self) -> Option<EndpointUpdate> {
        self.updates.recv().await
    }

    /// Drive every endpoint to completion
    pub async fn wait(mut self) -> LoadResults {
        while self.next_update().await.is_some() {}
        while self.tasks.join_next().await.is_some() {}
        self.snapshot()
    }

    /// Abort in-flight requests; their results are discarded
    pub fn cancel(mut self) -> LoadResults {
        self.tasks.abort_all();
        self.snapshot()
    }
}

impl std::fmt::Debug for LoadHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadHandle")
            .field("load_id", &self.load_id)
            .field("endpoints", &self.slots.len())
            .field("in_flight", &self.tasks.len())
            .finish()
    }
}
