//! Round-trip between the in-memory graph and the nested document form
//! `{name, nodes: {name: node}, edges: [edge]}`.
//!
//! Loading replays every node and then every edge through the normal
//! insertion path, so a document holding a direct-edge cycle fails to load.

use std::collections::BTreeMap;
use std::path::Path;

use governance_core::constants::DEFAULT_GRAPH_NAME;
use governance_core::errors::{CausalError, GovernanceResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::model::{CausalEdge, CausalNode};
use super::CausalGraph;

/// Serializable snapshot of a causal graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default = "default_graph_name")]
    pub name: String,
    #[serde(default)]
    pub nodes: BTreeMap<String, CausalNode>,
    #[serde(default)]
    pub edges: Vec<CausalEdge>,
}

fn default_graph_name() -> String {
    DEFAULT_GRAPH_NAME.to_string()
}

impl CausalGraph {
    /// Snapshot the graph as a document.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            name: self.name().to_string(),
            nodes: self
                .nodes()
                .map(|n| (n.name.clone(), n.clone()))
                .collect(),
            edges: self.edges().to_vec(),
        }
    }

    /// Rebuild a graph from a document, nodes first, then edges.
    ///
    /// Each node is keyed by its own `name` field; the map key is ignored.
    pub fn from_document(document: GraphDocument) -> Result<Self, CausalError> {
        let mut graph = CausalGraph::new(document.name);
        for node in document.nodes.into_values() {
            graph.add_node(node)?;
        }
        for edge in document.edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    pub fn to_json_string(&self) -> GovernanceResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    pub fn from_json_str(json: &str) -> GovernanceResult<Self> {
        let document: GraphDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document)?)
    }

    /// Write the graph to a JSON file.
    pub fn save_json(&self, path: &Path) -> GovernanceResult<()> {
        std::fs::write(path, self.to_json_string()?)?;
        info!(graph = %self.name(), path = %path.display(), "causal graph saved");
        Ok(())
    }

    /// Read a graph from a JSON file.
    pub fn load_json(path: &Path) -> GovernanceResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let graph = Self::from_json_str(&content)?;
        info!(
            graph = %graph.name(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "causal graph loaded"
        );
        Ok(graph)
    }
}
