//! CausalInferenceEngine: owns a graph and answers inference queries over it.
//!
//! Evidence is passed through each query explicitly; no query writes to a
//! node's `current_value`, so intervention and counterfactual analysis can
//! never leave scratch state behind in the caller's graph.

use std::sync::Arc;

use governance_core::config::InferenceConfig;
use governance_core::constants::INTERVENTION_CONFIDENCE;
use governance_core::errors::CausalError;
use governance_core::inference_span;
use moka::sync::Cache;
use tracing::debug;

use super::belief::{self, BeliefDistribution};
use super::narrative;
use super::{InferenceResult, QueryType};
use crate::graph::CausalGraph;

/// Cache key. The graph version makes every entry stale after a mutation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct BeliefKey {
    version: u64,
    variable: String,
    evidence_var: String,
    evidence_value: String,
}

/// Inference engine over an owned causal graph.
pub struct CausalInferenceEngine {
    graph: CausalGraph,
    /// Memoized beliefs. `None` when caching is disabled.
    beliefs: Option<Cache<BeliefKey, Arc<BeliefDistribution>>>,
}

impl CausalInferenceEngine {
    /// Create an engine with default configuration.
    pub fn new(graph: CausalGraph) -> Self {
        Self::with_config(graph, &InferenceConfig::default())
    }

    pub fn with_config(graph: CausalGraph, config: &InferenceConfig) -> Self {
        let beliefs = (config.belief_cache_capacity > 0)
            .then(|| Cache::new(config.belief_cache_capacity));
        Self { graph, beliefs }
    }

    pub fn graph(&self) -> &CausalGraph {
        &self.graph
    }

    /// Mutable access to the graph. Drops every cached belief, since the
    /// caller may replace the graph wholesale and reuse a version number.
    pub fn graph_mut(&mut self) -> &mut CausalGraph {
        if let Some(cache) = &self.beliefs {
            cache.invalidate_all();
        }
        &mut self.graph
    }

    pub fn into_graph(self) -> CausalGraph {
        self.graph
    }

    /// Number of beliefs currently memoized.
    pub fn cached_beliefs(&self) -> u64 {
        self.beliefs.as_ref().map_or(0, |cache| {
            cache.run_pending_tasks();
            cache.entry_count()
        })
    }

    // --- Queries ---

    /// Forward inference: given `source = value`, which effect is most likely?
    ///
    /// Every descendant gets a belief; the single (descendant, value) pair
    /// with the highest mass is reported. Ties go to the lexicographically
    /// first descendant, then to its first declared value.
    ///
    /// `value` must be one of `source`'s declared values.
    pub fn forward_inference(
        &self,
        source: &str,
        value: &str,
    ) -> Result<InferenceResult, CausalError> {
        self.require_value(source, value)?;
        let span = inference_span!(QueryType::Forward, source);
        let _guard = span.enter();

        let descendants = self.graph.get_descendants(source);
        let mut best: Option<(String, String, f64)> = None;
        for descendant in &descendants {
            let belief = self.belief(descendant, source, value);
            if let Some((likely, p)) = belief.most_likely() {
                if best.as_ref().map_or(true, |(_, _, bp)| p > *bp) {
                    best = Some((descendant.clone(), likely.to_string(), p));
                }
            }
        }

        let (target, inferred, probability) = match best {
            Some((t, v, p)) => (Some(t), Some(v), p),
            None => (None, None, 0.0),
        };
        debug!(target = ?target, probability, "forward inference complete");

        Ok(InferenceResult {
            query_type: QueryType::Forward,
            source_variable: Some(source.to_string()),
            reasoning_chain: narrative::forward(source, value, target.as_deref()),
            target_variable: target,
            inferred_value: inferred,
            probability,
            affected_variables: descendants.into_iter().collect(),
            confidence_score: probability,
        })
    }

    /// Backward inference: given an observed `target = value`, which ancestor
    /// most likely caused it?
    ///
    /// Each ancestor scores the mean likelihood of all its simple paths to
    /// `target`. Ties go to the lexicographically first ancestor.
    pub fn backward_inference(
        &self,
        target: &str,
        value: &str,
    ) -> Result<InferenceResult, CausalError> {
        self.require_value(target, value)?;
        let span = inference_span!(QueryType::Backward, target);
        let _guard = span.enter();

        let ancestors = self.graph.get_ancestors(target);
        let mut best: Option<(String, f64)> = None;
        for ancestor in &ancestors {
            let paths = self.graph.find_all_paths(ancestor, target);
            if paths.is_empty() {
                continue;
            }
            let mean = paths.iter().map(|p| self.path_likelihood(p)).sum::<f64>()
                / paths.len() as f64;
            if best.as_ref().map_or(true, |(_, bp)| mean > *bp) {
                best = Some((ancestor.clone(), mean));
            }
        }

        let (cause, probability) = match best {
            Some((c, p)) => (Some(c), p),
            None => (None, 0.0),
        };
        debug!(cause = ?cause, probability, "backward inference complete");

        Ok(InferenceResult {
            query_type: QueryType::Backward,
            reasoning_chain: narrative::backward(cause.as_deref(), target, value),
            source_variable: cause,
            target_variable: Some(target.to_string()),
            inferred_value: Some(value.to_string()),
            probability,
            affected_variables: ancestors.into_iter().collect(),
            confidence_score: probability,
        })
    }

    /// Intervention analysis: force `variable = value` and report the likely
    /// value of each descendant. The primary impact is the lexicographically
    /// first descendant with a belief.
    ///
    /// Confidence is the fixed [`INTERVENTION_CONFIDENCE`].
    pub fn intervention_analysis(
        &self,
        variable: &str,
        value: &str,
    ) -> Result<InferenceResult, CausalError> {
        self.require_value(variable, value)?;
        let span = inference_span!(QueryType::Intervention, variable);
        let _guard = span.enter();

        let descendants = self.graph.get_descendants(variable);
        let primary = descendants.iter().find_map(|d| {
            self.belief(d, variable, value)
                .most_likely()
                .map(|(likely, _)| (d.clone(), likely.to_string()))
        });
        debug!(primary = ?primary, affected = descendants.len(), "intervention analyzed");

        Ok(InferenceResult {
            query_type: QueryType::Intervention,
            source_variable: Some(variable.to_string()),
            reasoning_chain: narrative::intervention(
                variable,
                value,
                primary.as_ref().map(|(t, v)| (t.as_str(), v.as_str())),
            ),
            target_variable: primary.as_ref().map(|(t, _)| t.clone()),
            inferred_value: primary.map(|(_, v)| v),
            probability: INTERVENTION_CONFIDENCE,
            affected_variables: descendants.into_iter().collect(),
            confidence_score: INTERVENTION_CONFIDENCE,
        })
    }

    /// Counterfactual analysis: forward inference under the value actually
    /// chosen and under an alternative.
    ///
    /// Returns `(actual, counterfactual)`. The counterfactual result is tagged
    /// [`QueryType::Counterfactual`] and its reasoning opens with a marker
    /// naming both values.
    pub fn counterfactual_analysis(
        &self,
        variable: &str,
        actual_value: &str,
        alternative_value: &str,
    ) -> Result<(InferenceResult, InferenceResult), CausalError> {
        self.require_value(variable, actual_value)?;
        self.require_value(variable, alternative_value)?;
        let actual = self.forward_inference(variable, actual_value)?;
        let mut alternative = self.forward_inference(variable, alternative_value)?;

        alternative.query_type = QueryType::Counterfactual;
        alternative.reasoning_chain.insert(
            0,
            narrative::counterfactual_marker(actual_value, alternative_value),
        );
        Ok((actual, alternative))
    }

    /// Belief over `variable` given `evidence_var = evidence_value`.
    /// See [`belief::compute`] for the aggregation rule.
    pub fn compute_belief(
        &self,
        variable: &str,
        evidence_var: &str,
        evidence_value: &str,
    ) -> Result<BeliefDistribution, CausalError> {
        self.require(variable)?;
        self.require(evidence_var)?;
        Ok((*self.belief(variable, evidence_var, evidence_value)).clone())
    }

    // --- Internals ---

    fn require(&self, name: &str) -> Result<(), CausalError> {
        if self.graph.contains_node(name) {
            Ok(())
        } else {
            Err(CausalError::UnknownVariable {
                name: name.to_string(),
            })
        }
    }

    /// `name` must exist and `value` must be one of its declared values.
    fn require_value(&self, name: &str, value: &str) -> Result<(), CausalError> {
        self.require(name)?;
        match self.graph.node(name) {
            Some(node) if node.accepts(value) => Ok(()),
            _ => Err(CausalError::InvalidValue {
                node: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn belief(
        &self,
        variable: &str,
        evidence_var: &str,
        evidence_value: &str,
    ) -> Arc<BeliefDistribution> {
        let Some(cache) = &self.beliefs else {
            return Arc::new(belief::compute(
                &self.graph,
                variable,
                evidence_var,
                evidence_value,
            ));
        };

        let key = BeliefKey {
            version: self.graph.version(),
            variable: variable.to_string(),
            evidence_var: evidence_var.to_string(),
            evidence_value: evidence_value.to_string(),
        };
        if let Some(hit) = cache.get(&key) {
            return hit;
        }
        let computed = Arc::new(belief::compute(
            &self.graph,
            variable,
            evidence_var,
            evidence_value,
        ));
        cache.insert(key, Arc::clone(&computed));
        computed
    }

    /// Product of strength × confidence along a path's direct edges,
    /// capped at 1.0.
    fn path_likelihood(&self, path: &[String]) -> f64 {
        let likelihood: f64 = path
            .windows(2)
            .filter_map(|pair| {
                self.graph
                    .direct_edges()
                    .find(|e| e.connects(&pair[0], &pair[1]))
                    .map(|e| e.weight())
            })
            .product();
        likelihood.min(1.0)
    }
}
