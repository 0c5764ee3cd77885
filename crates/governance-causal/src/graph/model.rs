//! Node and edge types stored in the causal graph.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::relations::RelationType;

/// Role a variable plays in governance reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Decision,
    Risk,
    Outcome,
    Resource,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Risk => "risk",
            Self::Outcome => "outcome",
            Self::Resource => "resource",
        }
    }
}

/// A governance variable in the causal graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalNode {
    /// Unique key within the graph. Never renamed.
    pub name: String,
    pub node_type: NodeType,
    pub description: String,
    /// Governance category the variable belongs to.
    pub domain: String,
    /// Ordered set of legal values.
    pub possible_values: Vec<String>,
    /// Observed value, always one of `possible_values` when set.
    #[serde(default)]
    pub current_value: Option<String>,
    #[serde(default)]
    pub probability_distribution: BTreeMap<String, f64>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl CausalNode {
    /// Create a node with no current value, distribution, or metadata.
    pub fn new(
        name: impl Into<String>,
        node_type: NodeType,
        description: impl Into<String>,
        domain: impl Into<String>,
        possible_values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            node_type,
            description: description.into(),
            domain: domain.into(),
            possible_values: possible_values.into_iter().map(Into::into).collect(),
            current_value: None,
            probability_distribution: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Whether `value` is one of this node's legal values.
    pub fn accepts(&self, value: &str) -> bool {
        self.possible_values.iter().any(|v| v == value)
    }
}

/// A typed causal link between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source: String,
    pub target: String,
    pub relation_type: RelationType,
    /// Strength of the causal link, 0.0–1.0.
    pub strength: f64,
    /// Time for the effect to manifest.
    pub latency_ms: u64,
    /// Whether reverting the cause reverts the effect.
    pub reversible: bool,
    /// Confidence in the link itself, 0.0–1.0.
    pub confidence: f64,
    /// Free-text citations, in the order they were gathered.
    pub evidence: Vec<String>,
    /// Cause value → effect value pathways. Empty means the edge's weight
    /// picks the effect value (see `inference::belief`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub value_map: BTreeMap<String, String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl CausalEdge {
    /// Create an edge with no evidence, pathways, or metadata.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation_type: RelationType,
        strength: f64,
        confidence: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation_type,
            strength,
            latency_ms: 0,
            reversible: true,
            confidence,
            evidence: Vec::new(),
            value_map: BTreeMap::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_reversible(mut self, reversible: bool) -> Self {
        self.reversible = reversible;
        self
    }

    pub fn with_evidence(mut self, evidence: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.evidence = evidence.into_iter().map(Into::into).collect();
        self
    }

    /// Declare that cause value `from` drives the effect toward value `to`.
    pub fn with_pathway(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.value_map.insert(from.into(), to.into());
        self
    }

    /// Combined weight used by inference: strength × confidence.
    pub fn weight(&self) -> f64 {
        self.strength * self.confidence
    }

    /// Whether this edge connects `source` to `target`.
    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }

    /// Reason this edge cannot be stored, if any.
    pub(crate) fn weight_violation(&self) -> Option<String> {
        if !(0.0..=1.0).contains(&self.strength) {
            return Some(format!("strength {} outside [0, 1]", self.strength));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Some(format!("confidence {} outside [0, 1]", self.confidence));
        }
        None
    }
}
