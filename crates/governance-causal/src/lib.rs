//! # governance-causal
//!
//! The "what follows from what" engine. Holds a graph of governance variables
//! joined by typed causal edges, keeps the direct-edge subgraph acyclic, and
//! answers forward, backward, intervention, and counterfactual queries.

pub mod graph;
pub mod inference;
pub mod relations;
pub mod traversal;

pub use graph::model::{CausalEdge, CausalNode, NodeType};
pub use graph::persistence::GraphDocument;
pub use graph::CausalGraph;
pub use inference::belief::BeliefDistribution;
pub use inference::engine::CausalInferenceEngine;
pub use inference::{InferenceResult, QueryType};
pub use relations::RelationType;
