use super::{CausalError, ConfigError, StateError};

/// Top-level error aggregating every subsystem error via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GovernanceError {
    #[error("causal error: {0}")]
    Causal(#[from] CausalError),

    #[error("state error: {0}")]
    State(#[from] StateError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GovernanceResult<T> = Result<T, GovernanceError>;
