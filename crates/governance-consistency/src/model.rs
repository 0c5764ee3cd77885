//! Finding types produced by the consistency checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How urgent a finding is. Ordered so that `Critical > High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Most severe first.
    pub const ALL: [Severity; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sev| sev.as_str() == s)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of inconsistency detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyType {
    LogicContradiction,
    RuleConflict,
    CircularDependency,
    ProcessGap,
    ProcessOverlap,
    PolicyConflict,
    StateContradiction,
}

impl InconsistencyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LogicContradiction => "logic_contradiction",
            Self::RuleConflict => "rule_conflict",
            Self::CircularDependency => "circular_dependency",
            Self::ProcessGap => "process_gap",
            Self::ProcessOverlap => "process_overlap",
            Self::PolicyConflict => "policy_conflict",
            Self::StateContradiction => "state_contradiction",
        }
    }
}

impl fmt::Display for InconsistencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inconsistency {
    pub inconsistency_type: InconsistencyType,
    pub severity: Severity,
    /// Ids of the policies, rules, processes, domains, or entities involved.
    pub entities_involved: Vec<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Inconsistency {
    pub fn new(
        inconsistency_type: InconsistencyType,
        severity: Severity,
        entities_involved: Vec<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            inconsistency_type,
            severity,
            entities_involved,
            description: description.into(),
            suggested_fix: None,
        }
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.suggested_fix = Some(fix.into());
        self
    }
}
