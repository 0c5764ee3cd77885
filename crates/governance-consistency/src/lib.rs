//! # governance-consistency
//!
//! Six independent checks that look for contradictions inside a governance
//! corpus: policies, rules, processes, the entity dependency graph, and
//! entity states. Findings are data, never errors.

pub mod checker;
pub mod checks;
pub mod corpus;
pub mod model;
pub mod report;

pub use checker::SelfConsistencyChecker;
pub use corpus::{GovernanceCorpus, Policy, Process, ProcessStep, Rule, RuleDirective};
pub use model::{Inconsistency, InconsistencyType, Severity};
pub use report::ConsistencyReport;
