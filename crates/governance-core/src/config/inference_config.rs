use serde::{Deserialize, Serialize};

use crate::constants;

/// Inference engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Maximum number of memoized belief distributions. 0 disables caching.
    /// Default: 1024.
    pub belief_cache_capacity: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            belief_cache_capacity: constants::DEFAULT_BELIEF_CACHE_CAPACITY,
        }
    }
}
