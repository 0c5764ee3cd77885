//! # governance-core
//!
//! Foundation crate for the governance reasoning workspace.
//! Defines errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;

pub use config::GovernanceConfig;
pub use errors::{GovernanceError, GovernanceResult};
