//! Confounder detection: shared ancestors of two variables.

use std::collections::BTreeSet;

use crate::graph::CausalGraph;

impl CausalGraph {
    /// Nodes that are ancestors of both `a` and `b`.
    pub fn get_confounders(&self, a: &str, b: &str) -> BTreeSet<String> {
        let ancestors_a = self.get_ancestors(a);
        let ancestors_b = self.get_ancestors(b);
        ancestors_a.intersection(&ancestors_b).cloned().collect()
    }

    /// Whether `candidate` is an ancestor of both `a` and `b`.
    pub fn is_confounder(&self, candidate: &str, a: &str, b: &str) -> bool {
        self.get_ancestors(a).contains(candidate) && self.get_ancestors(b).contains(candidate)
    }
}
