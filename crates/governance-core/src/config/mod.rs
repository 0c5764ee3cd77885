//! Configuration system.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod consistency_config;
pub mod governance_config;
pub mod inference_config;
pub mod observability_config;

pub use consistency_config::ConsistencyConfig;
pub use governance_config::GovernanceConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
