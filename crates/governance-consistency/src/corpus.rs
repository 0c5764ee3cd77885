//! The governance corpus the checker inspects.
//!
//! Every collection is keyed by id and ordered, so checks visit pairs in a
//! stable order and produce the same findings on every run.

use std::collections::BTreeMap;

use governance_state::StateCoordinate;
use serde::{Deserialize, Serialize};

/// Everything the consistency checks look at. Every field may be omitted
/// when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceCorpus {
    pub policies: BTreeMap<String, Policy>,
    pub rules: BTreeMap<String, Rule>,
    pub processes: BTreeMap<String, Process>,
    /// Entity → entities it depends on.
    pub dependencies: BTreeMap<String, Vec<String>>,
    /// Current coordinate per entity, e.g. from `StateSpace::current_states`.
    pub states: BTreeMap<String, StateCoordinate>,
}

/// A policy: a governance domain plus its rule directives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub domain: String,
    pub rules: BTreeMap<String, RuleDirective>,
}

/// One rule inside a policy. Only the fields the checks read are typed;
/// anything else is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleDirective {
    /// e.g. "strict", "advisory", "prohibited".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<String>,
    pub required: bool,
    pub unencrypted: bool,
    /// What the directive applies to. `None` applies to everything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RuleDirective {
    pub fn has_enforcement(&self, level: &str) -> bool {
        self.enforcement.as_deref() == Some(level)
    }

    /// Whether two directives can refer to the same resource.
    pub fn shares_resource(&self, other: &RuleDirective) -> bool {
        match (&self.resource, &other.resource) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

/// A condition → action rule within a domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rule {
    pub domain: String,
    pub condition: String,
    pub action: String,
}

/// A governance process and the steps it defines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Process {
    /// Step names the process must define.
    pub required_steps: Vec<String>,
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessStep {
    pub name: String,
    /// Owner of the step. Steps without one never overlap with anything.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
}
