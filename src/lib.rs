//! # NXG Status
//!
//! A resilient status aggregation client for the ZQAutoNXG automation
//! backend. It fetches a fixed set of read-only endpoints concurrently,
//! normalizes whatever JSON comes back into default-filled display models,
//! and keeps every endpoint's outcome independent of the others.
//!
//! ## Layers
//!
//! - **Transport** - one GET per call against the configured base URL
//! - **Normalizer** - total mapping from raw JSON to a display model
//! - **Aggregator** - concurrent fan-out with per-endpoint results
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nxg_status::{Aggregator, ClientConfig, EndpointSpec, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let transport = HttpTransport::new(ClientConfig::from_env())?;
//!     let results = Aggregator::new(transport)
//!         .load_all(&[EndpointSpec::health(), EndpointSpec::workflows()])
//!         .await;
//!
//!     for (endpoint, result) in results.iter() {
//!         println!("{}: {}", endpoint.id, result.state_label());
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregator;
pub mod config;
pub mod model;
pub mod normalize;
pub mod transport;

// Re-export main types
pub use aggregator::{
    Aggregator, EndpointResult, EndpointSpec, EndpointUpdate, LoadHandle, LoadResults,
};
pub use config::{ClientConfig, ClientProfile, ConfigError, DEFAULT_BASE_URL};
pub use model::{
    ComponentHealth, ComponentStatus, DisplayModel, EndpointKind, HealthReport, Reachability,
    StatusLevel, SystemStatus, WorkflowId, WorkflowSummary,
};
pub use normalize::normalize;
pub use transport::{HttpTransport, Transport, TransportError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aggregator::{Aggregator, EndpointResult, EndpointSpec, LoadHandle};
    pub use crate::config::{ClientConfig, ClientProfile};
    pub use crate::model::{DisplayModel, EndpointKind};
    pub use crate::transport::{HttpTransport, Transport, TransportError};
}
