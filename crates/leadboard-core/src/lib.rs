//! Core domain types and pure computation for the leadboard workspace.
//!
//! Everything in this crate operates on an immutable `&[Lead]` snapshot:
//! aggregation ([`metrics`]), filtering ([`filter`]), and display
//! formatting ([`format`]) are pure functions, so callers never need
//! locking beyond swapping whole snapshots.

pub mod app_config;
mod config;
pub mod filter;
pub mod format;
mod lead;
pub mod metrics;

pub use app_config::{AppConfig, DashboardCredentials, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{Lead, LeadField};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
