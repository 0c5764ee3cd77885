//! The 5 causal relation types and their graph semantics.

use serde::{Deserialize, Serialize};

/// How a cause relates to its effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    /// A directly causes B. Only these edges form the DAG.
    Direct,
    /// A causes B through unmodelled intermediaries.
    Indirect,
    /// A and B share an upstream cause.
    Confounded,
    /// A and B influence each other (feedback loop).
    Bidirectional,
    /// A causes B only under some condition.
    Conditional,
}

impl RelationType {
    /// All variants for iteration.
    pub const ALL: [RelationType; 5] = [
        Self::Direct,
        Self::Indirect,
        Self::Confounded,
        Self::Bidirectional,
        Self::Conditional,
    ];

    /// Whether edges of this type are subject to the acyclicity guard and
    /// followed by traversal.
    pub fn is_direct(&self) -> bool {
        matches!(self, Self::Direct)
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "direct" => Some(Self::Direct),
            "indirect" => Some(Self::Indirect),
            "confounded" => Some(Self::Confounded),
            "bidirectional" => Some(Self::Bidirectional),
            "conditional" => Some(Self::Conditional),
            _ => None,
        }
    }

    /// String tag for this relation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Indirect => "indirect",
            Self::Confounded => "confounded",
            Self::Bidirectional => "bidirectional",
            Self::Conditional => "conditional",
        }
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
