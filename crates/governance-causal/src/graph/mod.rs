//! CausalGraph: name-keyed nodes plus an ordered edge list, with the
//! direct-edge subgraph kept acyclic on every insertion.

pub mod dag_enforcement;
pub mod model;
pub mod persistence;

use std::collections::BTreeMap;

use governance_core::constants::DEFAULT_GRAPH_NAME;
use governance_core::errors::CausalError;
use tracing::{debug, warn};

use self::model::{CausalEdge, CausalNode};

/// Directed graph of governance variables and typed causal edges.
///
/// Nodes are added incrementally and never renamed or removed; edges can be
/// removed by endpoint pair. Every structural mutation bumps [`version`],
/// which consumers use to invalidate derived views.
///
/// [`version`]: CausalGraph::version
#[derive(Debug, Clone)]
pub struct CausalGraph {
    name: String,
    nodes: BTreeMap<String, CausalNode>,
    edges: Vec<CausalEdge>,
    version: u64,
}

impl CausalGraph {
    /// Create an empty graph with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monotonic counter bumped on every structural or value mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    // --- Mutation ---

    /// Add a node. Fails if the name is taken or its current value is not
    /// one of its possible values.
    pub fn add_node(&mut self, node: CausalNode) -> Result<(), CausalError> {
        if self.nodes.contains_key(&node.name) {
            return Err(CausalError::DuplicateNode { name: node.name });
        }
        if let Some(value) = &node.current_value {
            if !node.accepts(value) {
                return Err(CausalError::InvalidValue {
                    node: node.name.clone(),
                    value: value.clone(),
                });
            }
        }

        debug!(node = %node.name, node_type = node.node_type.as_str(), "node added");
        self.nodes.insert(node.name.clone(), node);
        self.version += 1;
        Ok(())
    }

    /// Add an edge. Both endpoints must exist, and a `direct` edge must not
    /// close a cycle among `direct` edges.
    pub fn add_edge(&mut self, edge: CausalEdge) -> Result<(), CausalError> {
        self.check_edge(&edge)?;

        if edge.relation_type.is_direct()
            && dag_enforcement::would_create_cycle(self, &edge.source, &edge.target)
        {
            warn!(source = %edge.source, target = %edge.target, "rejected direct edge: cycle");
            return Err(CausalError::CycleViolation {
                cause: edge.source,
                effect: edge.target,
            });
        }

        debug!(
            source = %edge.source,
            target = %edge.target,
            relation = %edge.relation_type,
            "edge added"
        );
        self.edges.push(edge);
        self.version += 1;
        Ok(())
    }

    /// Bulk import that checks endpoints and weights but skips the per-edge
    /// cycle guard. Run [`validate`](Self::validate) afterwards.
    ///
    /// Either every edge is added or none is.
    pub fn load_edges_unchecked(
        &mut self,
        edges: impl IntoIterator<Item = CausalEdge>,
    ) -> Result<usize, CausalError> {
        let edges: Vec<CausalEdge> = edges.into_iter().collect();
        for edge in &edges {
            self.check_edge(edge)?;
        }

        let count = edges.len();
        if count > 0 {
            self.edges.extend(edges);
            self.version += 1;
        }
        debug!(count, "edges bulk loaded without cycle checks");
        Ok(count)
    }

    /// Remove every edge from `source` to `target`, whatever its relation
    /// type. Returns whether anything was removed.
    pub fn remove_edge(&mut self, source: &str, target: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| !e.connects(source, target));
        let removed = self.edges.len() < before;
        if removed {
            debug!(source, target, count = before - self.edges.len(), "edges removed");
            self.version += 1;
        }
        removed
    }

    /// Record an observed value on a node.
    pub fn set_current_value(&mut self, name: &str, value: &str) -> Result<(), CausalError> {
        let node = self
            .nodes
            .get_mut(name)
            .ok_or_else(|| CausalError::UnknownNode {
                name: name.to_string(),
            })?;
        if !node.accepts(value) {
            return Err(CausalError::InvalidValue {
                node: name.to_string(),
                value: value.to_string(),
            });
        }
        node.current_value = Some(value.to_string());
        self.version += 1;
        Ok(())
    }

    fn check_edge(&self, edge: &CausalEdge) -> Result<(), CausalError> {
        for endpoint in [&edge.source, &edge.target] {
            if !self.nodes.contains_key(endpoint) {
                return Err(CausalError::UnknownNode {
                    name: endpoint.clone(),
                });
            }
        }
        if let Some(reason) = edge.weight_violation() {
            return Err(CausalError::InvalidEdge {
                cause: edge.source.clone(),
                effect: edge.target.clone(),
                reason,
            });
        }
        Ok(())
    }

    // --- Read access ---

    pub fn node(&self, name: &str) -> Option<&CausalNode> {
        self.nodes.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Nodes in name order.
    pub fn nodes(&self) -> impl Iterator<Item = &CausalNode> {
        self.nodes.values()
    }

    /// Node names in lexicographic order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[CausalEdge] {
        &self.edges
    }

    /// Edges of type `direct`, in insertion order.
    pub fn direct_edges(&self) -> impl Iterator<Item = &CausalEdge> {
        self.edges.iter().filter(|e| e.relation_type.is_direct())
    }

    /// First edge from `source` to `target`, any relation type.
    pub fn find_edge(&self, source: &str, target: &str) -> Option<&CausalEdge> {
        self.edges.iter().find(|e| e.connects(source, target))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Validation ---

    /// Re-check the graph for consistency.
    ///
    /// Reports every node on a direct-edge cycle (possible only through
    /// [`load_edges_unchecked`](Self::load_edges_unchecked)) and every
    /// isolated node. Isolation is a warning, but it still marks the graph
    /// as not valid.
    pub fn validate(&self) -> (bool, Vec<String>) {
        let mut errors = Vec::new();

        for cycle in dag_enforcement::find_cycles(self) {
            for node in &cycle {
                errors.push(format!("Potential unintended cycle involving {node}"));
            }
        }

        for name in self.nodes.keys() {
            if self.get_parents(name).is_empty() && self.get_children(name).is_empty() {
                errors.push(format!("Node {name} is isolated (no relationships)"));
            }
        }

        if !errors.is_empty() {
            warn!(graph = %self.name, findings = errors.len(), "graph validation findings");
        }
        (errors.is_empty(), errors)
    }
}

impl Default for CausalGraph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl std::fmt::Display for CausalGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CausalGraph({}): {} nodes, {} edges",
            self.name,
            self.nodes.len(),
            self.edges.len()
        )
    }
}
