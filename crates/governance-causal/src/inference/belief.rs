//! Single-hop belief aggregation.
//!
//! A belief is a normalized weight vector over a variable's possible values,
//! built only from the edges leaving the evidence variable. This is not
//! marginal inference over the whole graph: the result depends only on the
//! evidence variable's own edges, which keeps it deterministic and cheap.

use serde::{Deserialize, Serialize};

use crate::graph::model::{CausalEdge, CausalNode};
use crate::graph::CausalGraph;

/// Probability-like weights over a variable's possible values, in the
/// variable's declared value order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeliefDistribution {
    entries: Vec<(String, f64)>,
}

impl BeliefDistribution {
    /// Equal mass on every value.
    pub fn uniform(values: &[String]) -> Self {
        let share = 1.0 / values.len() as f64;
        Self {
            entries: values.iter().map(|v| (v.clone(), share)).collect(),
        }
    }

    pub fn probability(&self, value: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(v, _)| v == value)
            .map(|(_, p)| *p)
    }

    /// Highest-mass value. Ties go to the value declared first.
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (value, p) in &self.entries {
            if best.map_or(true, |(_, bp)| *p > bp) {
                best = Some((value.as_str(), *p));
            }
        }
        best
    }

    /// Sum of all weights; 1.0 for any non-empty distribution.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, p)| p).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(v, p)| (v.as_str(), *p))
    }
}

/// Belief over `variable`'s values given `evidence_var = evidence_value`.
///
/// Relevant edges leave `evidence_var` and reach `variable` (or are it).
/// With none, the result is uniform. Otherwise each relevant edge that
/// targets `variable` adds its weight to the value its pathway selects, and
/// the vector is normalized; an all-zero vector falls back to uniform.
/// An unknown `variable`, or one with no values, yields an empty belief.
pub fn compute(
    graph: &CausalGraph,
    variable: &str,
    evidence_var: &str,
    evidence_value: &str,
) -> BeliefDistribution {
    let node = match graph.node(variable) {
        Some(node) if !node.possible_values.is_empty() => node,
        _ => return BeliefDistribution::default(),
    };

    let relevant: Vec<&CausalEdge> = graph
        .edges()
        .iter()
        .filter(|e| e.source == evidence_var && graph.can_reach(&e.target, variable))
        .collect();
    if relevant.is_empty() {
        return BeliefDistribution::uniform(&node.possible_values);
    }

    let mut weights = vec![0.0_f64; node.possible_values.len()];
    for edge in relevant.iter().filter(|e| e.target == variable) {
        match pathway_index(edge, node, evidence_value) {
            Some(idx) => weights[idx] += edge.weight(),
            // Unresolvable pathway: the edge supports every value equally.
            None => weights.iter_mut().for_each(|w| *w += edge.weight()),
        }
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return BeliefDistribution::uniform(&node.possible_values);
    }
    BeliefDistribution {
        entries: node
            .possible_values
            .iter()
            .cloned()
            .zip(weights.into_iter().map(|w| w / total))
            .collect(),
    }
}

/// Index of the effect value an edge drives toward for a given cause value.
///
/// An explicit `value_map` entry wins. Without one, the edge's weight picks
/// a band of the ordered values: `min(floor(weight × n), n − 1)`, so weak
/// links land on early values and strong links on late ones.
fn pathway_index(edge: &CausalEdge, effect: &CausalNode, evidence_value: &str) -> Option<usize> {
    let n = effect.possible_values.len();
    if let Some(mapped) = edge.value_map.get(evidence_value) {
        return effect.possible_values.iter().position(|v| v == mapped);
    }
    let band = (edge.weight() * n as f64).floor() as usize;
    Some(band.min(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::NodeType;
    use crate::relations::RelationType;

    fn levels() -> Vec<&'static str> {
        vec!["low", "medium", "high"]
    }

    fn two_node_graph(edge: CausalEdge) -> CausalGraph {
        let mut graph = CausalGraph::default();
        graph
            .add_node(CausalNode::new("cause", NodeType::Decision, "", "d", ["true", "false"]))
            .unwrap();
        graph
            .add_node(CausalNode::new("effect", NodeType::Outcome, "", "d", levels()))
            .unwrap();
        graph.add_edge(edge).unwrap();
        graph
    }

    #[test]
    fn weight_band_selects_single_value() {
        // 0.7 * 0.85 = 0.595 → floor(1.785) = 1 → "medium".
        let graph = two_node_graph(CausalEdge::new("cause", "effect", RelationType::Direct, 0.7, 0.85));
        let belief = compute(&graph, "effect", "cause", "true");
        assert_eq!(belief.most_likely(), Some(("medium", 1.0)));
        assert_eq!(belief.probability("low"), Some(0.0));
    }

    #[test]
    fn full_weight_lands_on_last_value() {
        let graph = two_node_graph(CausalEdge::new("cause", "effect", RelationType::Direct, 1.0, 1.0));
        let belief = compute(&graph, "effect", "cause", "true");
        assert_eq!(belief.most_likely(), Some(("high", 1.0)));
    }

    #[test]
    fn explicit_pathway_overrides_band() {
        let edge = CausalEdge::new("cause", "effect", RelationType::Direct, 0.7, 0.85)
            .with_pathway("true", "high")
            .with_pathway("false", "low");
        let graph = two_node_graph(edge);
        assert_eq!(compute(&graph, "effect", "cause", "true").most_likely(), Some(("high", 1.0)));
        assert_eq!(compute(&graph, "effect", "cause", "false").most_likely(), Some(("low", 1.0)));
    }

    #[test]
    fn unknown_pathway_target_spreads_evenly() {
        let edge = CausalEdge::new("cause", "effect", RelationType::Direct, 0.5, 0.5)
            .with_pathway("true", "catastrophic");
        let graph = two_node_graph(edge);
        let belief = compute(&graph, "effect", "cause", "true");
        for (_, p) in belief.iter() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn zero_weight_falls_back_to_uniform() {
        let graph = two_node_graph(CausalEdge::new("cause", "effect", RelationType::Direct, 0.0, 0.9));
        let belief = compute(&graph, "effect", "cause", "true");
        assert_eq!(belief.len(), 3);
        assert!((belief.total() - 1.0).abs() < 1e-12);
        assert!((belief.probability("high").unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn missing_variable_yields_empty_belief() {
        let graph = two_node_graph(CausalEdge::new("cause", "effect", RelationType::Direct, 0.5, 0.5));
        assert!(compute(&graph, "nowhere", "cause", "true").is_empty());
    }

    #[test]
    fn most_likely_prefers_first_declared_on_tie() {
        let belief = BeliefDistribution::uniform(&["a".to_string(), "b".to_string()]);
        assert_eq!(belief.most_likely(), Some(("a", 0.5)));
    }
}
