/// Causal graph and inference errors.
///
/// Every variant aborts the operation that raised it before any mutation,
/// so a failed call leaves the graph exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CausalError {
    #[error("node '{name}' already exists")]
    DuplicateNode { name: String },

    #[error("node '{name}' not found in graph")]
    UnknownNode { name: String },

    #[error("variable '{name}' not found in graph")]
    UnknownVariable { name: String },

    #[error("adding direct edge {cause} -> {effect} would create a cycle")]
    CycleViolation { cause: String, effect: String },

    #[error("value '{value}' is not a possible value of node '{node}'")]
    InvalidValue { node: String, value: String },

    #[error("invalid edge {cause} -> {effect}: {reason}")]
    InvalidEdge {
        cause: String,
        effect: String,
        reason: String,
    },
}
