//! Display model types
//!
//! Every type here is a plain value produced by the normalizer. Fields a
//! presentation layer reads are always populated; optional data is an
//! explicit `Option`.

pub mod display;
pub mod health;
pub mod status;
pub mod workflow;

pub use display::{DisplayModel, EndpointKind};
pub use health::{ComponentHealth, ComponentStatus, HealthReport};
pub use status::{Reachability, StatusLevel, SystemStatus};
pub use workflow::{WorkflowId, WorkflowSummary};
