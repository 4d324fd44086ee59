//! Status aggregation
//!
//! Fans out one transport call per endpoint and collects the normalized
//! results. Endpoints never wait on one another: a failure or a slow
//! response only ever affects its own slot.
//!
//! ```rust,no_run
//! use nxg_status::{Aggregator, ClientConfig, ClientProfile, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = HttpTransport::new(ClientConfig::from_env())?;
//!     let aggregator = Aggregator::new(transport);
//!
//!     let mut load = aggregator.spawn(&ClientProfile::Site.endpoints());
//!     while let Some(update) = load.next_update().await {
//!         println!("{} -> {}", update.endpoint.id, update.result.state_label());
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

use crate::normalize::normalize;
use crate::transport::Transport;

pub mod endpoint;
pub mod handle;
pub mod result;

pub use endpoint::EndpointSpec;
pub use handle::LoadHandle;
pub use result::{EndpointResult, EndpointUpdate, LoadResults};

#[derive(Clone)]
pub struct Aggregator {
    transport: Arc<dyn Transport>,
}

impl Aggregator {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn from_arc(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch every endpoint concurrently and wait for all of them
    pub async fn load_all(&self, endpoints: &[EndpointSpec]) -> LoadResults {
        let load_id = Uuid::new_v4();
        let specs = unique(endpoints);
        let span = info_span!("load", load_id = %load_id, endpoints = specs.len());

        let results = join_all(
            specs
                .iter()
                .map(|spec| fetch_one(self.transport.as_ref(), spec)),
        )
        .instrument(span)
        .await;

        LoadResults::new(specs.into_iter().zip(results).collect())
    }

    /// Start every endpoint in the background and return immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(&self, endpoints: &[EndpointSpec]) -> LoadHandle {
        let load_id = Uuid::new_v4();
        let specs = unique(endpoints);
        let span = info_span!("load", load_id = %load_id, endpoints = specs.len());

        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        let mut tasks = JoinSet::new();
        let mut slots = Vec::with_capacity(specs.len());

        for spec in specs {
            let (slot_tx, slot_rx) = watch::channel(EndpointResult::Pending);
            slots.push((spec.clone(), slot_rx));

            let transport = Arc::clone(&self.transport);
            let updates_tx = updates_tx.clone();

            tasks.spawn(
                async move {
                    let result = fetch_one(transport.as_ref(), &spec).await;

                    // A consumer that went away is not an error
                    if slot_tx.send(result.clone()).is_err() {
                        debug!("Discarding result for '{}': slot dropped", spec.id);
                    }
                    if updates_tx
                        .send(EndpointUpdate {
                            endpoint: spec,
                            result,
                        })
                        .is_err()
                    {
                        debug!("Discarding update: load handle dropped");
                    }
                }
                .instrument(span.clone()),
            );
        }

        LoadHandle::new(load_id, slots, updates_rx, tasks)
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}

async fn fetch_one(transport: &dyn Transport, spec: &EndpointSpec) -> EndpointResult {
    match transport.fetch(&spec.path).await {
        Ok(raw) => EndpointResult::Ok(normalize(Some(&raw), spec.kind)),
        Err(e) => {
            warn!("Endpoint '{}' ({}) failed: {}", spec.id, spec.path, e);
            EndpointResult::Failed(e)
        }
    }
}

/// Endpoint ids are unique per load; later duplicates are dropped
fn unique(endpoints: &[EndpointSpec]) -> Vec<EndpointSpec> {
    let mut seen = HashSet::new();
    endpoints
        .iter()
        .filter(|spec| {
            let fresh = seen.insert(spec.id.as_str());
            if !fresh {
                warn!("Ignoring duplicate endpoint id '{}'", spec.id);
            }
            fresh
        })
        .cloned()
        .collect()
}
