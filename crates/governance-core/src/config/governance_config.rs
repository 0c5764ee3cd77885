//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ConsistencyConfig, InferenceConfig, ObservabilityConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GOVERNANCE_*`)
/// 2. Config file passed to [`GovernanceConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GovernanceConfig {
    pub inference: InferenceConfig,
    pub consistency: ConsistencyConfig,
    pub observability: ObservabilityConfig,
}

impl GovernanceConfig {
    /// Load configuration from an optional TOML file, then apply env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !constants::LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {:?}", constants::LOG_LEVELS),
            });
        }
        for check in &self.consistency.enabled_checks {
            if !constants::CONSISTENCY_CHECKS.contains(&check.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "consistency.enabled_checks".to_string(),
                    message: format!("unknown check '{check}'"),
                });
            }
        }
        if !constants::SEVERITY_NAMES.contains(&self.consistency.fail_on.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "consistency.fail_on".to_string(),
                message: format!("must be one of {:?}", constants::SEVERITY_NAMES),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the lower layer wins.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("GOVERNANCE_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("GOVERNANCE_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json = v;
            }
        }
        if let Ok(val) = std::env::var("GOVERNANCE_BELIEF_CACHE_CAPACITY") {
            if let Ok(v) = val.parse::<u64>() {
                self.inference.belief_cache_capacity = v;
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
