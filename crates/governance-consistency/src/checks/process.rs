//! Process integrity: gaps (required steps not defined) and overlaps
//! (two processes claiming the same responsibility).

use std::collections::BTreeSet;

use crate::checks::pairs;
use crate::corpus::{GovernanceCorpus, Process};
use crate::model::{Inconsistency, InconsistencyType, Severity};

pub const NAME: &str = "process_integrity";

pub fn check(corpus: &GovernanceCorpus) -> Vec<Inconsistency> {
    let mut findings = Vec::new();

    for (id, process) in &corpus.processes {
        let missing = missing_steps(process);
        if !missing.is_empty() {
            findings.push(
                Inconsistency::new(
                    InconsistencyType::ProcessGap,
                    Severity::Medium,
                    vec![id.clone()],
                    format!("Process '{id}' has missing steps: {}", missing.join(", ")),
                )
                .with_fix("Define all required process steps"),
            );
        }
    }

    for ((a_id, a), (b_id, b)) in pairs(&corpus.processes) {
        let shared: Vec<&str> = responsibilities(a)
            .intersection(&responsibilities(b))
            .copied()
            .collect();
        if !shared.is_empty() {
            findings.push(
                Inconsistency::new(
                    InconsistencyType::ProcessOverlap,
                    Severity::Medium,
                    vec![a_id.clone(), b_id.clone()],
                    format!(
                        "Processes '{a_id}' and '{b_id}' have overlapping responsibilities: {}",
                        shared.join(", ")
                    ),
                )
                .with_fix("Clarify ownership and eliminate duplicate steps"),
            );
        }
    }

    findings
}

/// Required steps with no defined step of the same name, in declared order.
fn missing_steps(process: &Process) -> Vec<&str> {
    process
        .required_steps
        .iter()
        .filter(|required| !process.steps.iter().any(|s| &s.name == *required))
        .map(String::as_str)
        .collect()
}

fn responsibilities(process: &Process) -> BTreeSet<&str> {
    process
        .steps
        .iter()
        .filter_map(|s| s.responsibility.as_deref())
        .collect()
}
