/// State space errors.
///
/// Illegal transitions are not errors; they come back as a rejected
/// `TransitionOutcome` from the state space.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("entity '{entity_id}' is already tracked")]
    AlreadyExists { entity_id: String },

    #[error("unknown state dimension '{name}'")]
    UnknownDimension { name: String },

    #[error("unknown value '{value}' for dimension '{dimension}'")]
    UnknownStateValue { dimension: String, value: String },
}
