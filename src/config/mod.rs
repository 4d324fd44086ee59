//! Client configuration
//!
//! This module contains:
//! - `client` - Base URL, timeout and headers for the backend transport
//! - `profile` - The fixed endpoint sets loaded by each dashboard flavour

pub mod client;
pub mod profile;

pub use client::{
    ClientConfig, ConfigError, API_TIMEOUT_ENV, API_URL_ENV, DEFAULT_BASE_URL, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_TIMEOUT_MS,
};
pub use profile::ClientProfile;
