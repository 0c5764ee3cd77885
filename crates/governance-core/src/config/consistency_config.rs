use serde::{Deserialize, Serialize};

use crate::constants;

/// Self-consistency checker configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsistencyConfig {
    /// Checks to run, by name. Default: all six.
    pub enabled_checks: Vec<String>,
    /// Lowest severity that makes a report fail. Default: "low".
    pub fail_on: String,
}

impl ConsistencyConfig {
    /// Whether the named check should run.
    pub fn is_enabled(&self, check: &str) -> bool {
        self.enabled_checks.iter().any(|c| c == check)
    }
}

impl Default for ConsistencyConfig {
    fn default() -> Self {
        Self {
            enabled_checks: constants::CONSISTENCY_CHECKS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            fail_on: "low".to_string(),
        }
    }
}
