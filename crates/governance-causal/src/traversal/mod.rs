//! Traversal over the direct-edge subgraph: neighbors, ancestry, paths,
//! and confounders. Non-direct relations are never followed.

pub mod confounders;
pub mod paths;

use std::collections::{BTreeSet, VecDeque};

use crate::graph::CausalGraph;

impl CausalGraph {
    /// Direct causes of `name`, in edge insertion order.
    pub fn get_parents(&self, name: &str) -> Vec<String> {
        self.direct_edges()
            .filter(|e| e.target == name)
            .map(|e| e.source.clone())
            .collect()
    }

    /// Direct effects of `name`, in edge insertion order.
    pub fn get_children(&self, name: &str) -> Vec<String> {
        self.direct_edges()
            .filter(|e| e.source == name)
            .map(|e| e.target.clone())
            .collect()
    }

    /// Every node that causes `name`, directly or transitively.
    pub fn get_ancestors(&self, name: &str) -> BTreeSet<String> {
        self.closure(name, |graph, current| graph.get_parents(current))
    }

    /// Every node that `name` causes, directly or transitively.
    pub fn get_descendants(&self, name: &str) -> BTreeSet<String> {
        self.closure(name, |graph, current| graph.get_children(current))
    }

    /// Breadth-first transitive expansion from `start`. The start node is
    /// only included if it is reachable from itself.
    fn closure(
        &self,
        start: &str,
        step: impl Fn(&CausalGraph, &str) -> Vec<String>,
    ) -> BTreeSet<String> {
        let mut reached = BTreeSet::new();
        let mut queue: VecDeque<String> = step(self, start).into();

        while let Some(current) = queue.pop_front() {
            if reached.insert(current.clone()) {
                queue.extend(step(self, &current));
            }
        }
        reached
    }
}
