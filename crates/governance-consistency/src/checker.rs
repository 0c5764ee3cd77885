//! SelfConsistencyChecker: runs the enabled checks over a corpus and keeps
//! the findings of the latest run.

use governance_core::config::ConsistencyConfig;
use governance_core::consistency_span;
use tracing::{debug, info};

use crate::checks;
use crate::corpus::GovernanceCorpus;
use crate::model::{Inconsistency, Severity};
use crate::report::ConsistencyReport;

/// Runs the six consistency checks on demand.
///
/// Each [`check_all`](Self::check_all) replaces the findings of the previous
/// run; nothing accumulates across calls.
#[derive(Debug, Clone, Default)]
pub struct SelfConsistencyChecker {
    config: ConsistencyConfig,
    inconsistencies: Vec<Inconsistency>,
}

impl SelfConsistencyChecker {
    pub fn new(config: ConsistencyConfig) -> Self {
        Self {
            config,
            inconsistencies: Vec::new(),
        }
    }

    /// Run every enabled check, in registry order. Returns whether the
    /// corpus is fully consistent along with the findings.
    pub fn check_all(&mut self, corpus: &GovernanceCorpus) -> (bool, &[Inconsistency]) {
        let enabled: Vec<_> = checks::REGISTRY
            .iter()
            .filter(|(name, _)| self.config.is_enabled(name))
            .collect();
        let span = consistency_span!(enabled.len());
        let _guard = span.enter();

        let mut findings = Vec::new();
        for (name, check) in enabled {
            let found = check(corpus);
            debug!(check = name, findings = found.len(), "consistency check complete");
            findings.extend(found);
        }
        self.inconsistencies = findings;

        info!(findings = self.inconsistencies.len(), "consistency run complete");
        (self.inconsistencies.is_empty(), &self.inconsistencies)
    }

    /// Findings of the latest run.
    pub fn inconsistencies(&self) -> &[Inconsistency] {
        &self.inconsistencies
    }

    /// Report over the latest run's findings.
    pub fn report(&self) -> ConsistencyReport {
        ConsistencyReport::new(self.inconsistencies.clone())
    }

    /// Whether the latest run passes the configured `fail_on` threshold.
    pub fn passes(&self) -> bool {
        let threshold = Severity::from_str_name(&self.config.fail_on).unwrap_or(Severity::Low);
        self.report().passes(threshold)
    }
}
