//! Causal inference over a [`CausalGraph`](crate::CausalGraph): forward,
//! backward, intervention, and counterfactual queries.

pub mod belief;
pub mod engine;
pub mod narrative;

use serde::{Deserialize, Serialize};

/// Kind of question an [`InferenceResult`] answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Cause → most likely effect.
    Forward,
    /// Observed effect → most likely cause.
    Backward,
    /// Forced value → downstream effects.
    Intervention,
    /// Alternative decision → how outcomes would differ.
    Counterfactual,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
            Self::Intervention => "intervention",
            Self::Counterfactual => "counterfactual",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer to a single inference query. Produced fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceResult {
    pub query_type: QueryType,
    /// The cause. `None` for a backward query with no causal origin.
    pub source_variable: Option<String>,
    /// The effect. `None` for a forward query with no descendants.
    pub target_variable: Option<String>,
    pub inferred_value: Option<String>,
    pub probability: f64,
    /// Human-readable explanation, one step per entry.
    pub reasoning_chain: Vec<String>,
    /// Every variable the query touched, in name order.
    pub affected_variables: Vec<String>,
    pub confidence_score: f64,
}
