//! Error handling for the governance workspace.
//! One error enum per subsystem, `thiserror` only.

pub mod causal_error;
pub mod config_error;
pub mod governance_error;
pub mod state_error;

pub use causal_error::CausalError;
pub use config_error::ConfigError;
pub use governance_error::{GovernanceError, GovernanceResult};
pub use state_error::StateError;
