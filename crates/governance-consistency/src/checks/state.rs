//! State contradiction: a short, explicit list of coordinate combinations
//! that are implausible for a governed entity. Not a constraint solver.

use governance_state::{
    ComplianceState, DecisionState, ResourceState, RiskState, StateCoordinate, TimeState,
};

use crate::corpus::GovernanceCorpus;
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "state_constraints";

/// Finished on schedule with everything in order, yet at critical risk.
const CRITICAL_BUT_COMPLETE: StateCoordinate = StateCoordinate {
    decision: DecisionState::Completed,
    risk: RiskState::Critical,
    compliance: ComplianceState::Compliant,
    resource: ResourceState::Sufficient,
    time: TimeState::OnSchedule,
};

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    let mut findings = Vec::new();
    for (id, coordinate) in &corpus.states {
        if coordinate.decision == DecisionState::RolledBack
            && coordinate.compliance == ComplianceState::Exempted
        {
            findings.push(
                Inconsistency::new(
                    InconsistencyType::StateContradiction,
                    Severity::Medium,
                    vec![id.clone()],
                    format!("Entity '{id}' is rolled back yet still exempted from compliance {coordinate}"),
                )
                .with_fix("Revoke the exemption or record why a rolled-back decision keeps it"),
            );
        }
        if *coordinate == CRITICAL_BUT_COMPLETE {
            findings.push(
                Inconsistency::new(
                    InconsistencyType::StateContradiction,
                    Severity::Low,
                    vec![id.clone()],
                    format!("Entity '{id}' completed cleanly but is rated critical risk {coordinate}"),
                )
                .with_fix("Re-assess the risk rating of the completed decision"),
            );
        }
    }
    findings
}
