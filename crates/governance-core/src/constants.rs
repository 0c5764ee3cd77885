//! Shared constants.

/// Name given to a causal graph when none is supplied.
pub const DEFAULT_GRAPH_NAME: &str = "GovernanceCausalGraph";

/// Confidence reported by intervention analysis.
///
/// Interventions are structural simulations over the graph, not fitted
/// estimates, so the confidence is a fixed figure rather than derived data.
pub const INTERVENTION_CONFIDENCE: f64 = 0.85;

/// Default capacity of the inference engine's belief cache.
pub const DEFAULT_BELIEF_CACHE_CAPACITY: u64 = 1024;

/// Number of values in each state dimension.
pub const STATE_DIMENSION_CARDINALITY: usize = 5;

/// Number of state dimensions.
pub const STATE_DIMENSION_COUNT: usize = 5;

/// Size of the full state space (5^5).
pub const STATE_SPACE_SIZE: usize = 3125;

/// Trigger event recorded on an entity's first snapshot.
pub const ENTITY_CREATED_EVENT: &str = "entity_created";

/// Log levels accepted by the observability config.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Names of the consistency checks, in execution order.
pub const CONSISTENCY_CHECKS: [&str; 6] = [
    "logic",
    "rules",
    "circular_dependencies",
    "process_integrity",
    "policy_conflicts",
    "state_constraints",
];

/// Severity names, most severe first.
pub const SEVERITY_NAMES: [&str; 4] = ["critical", "high", "medium", "low"];
