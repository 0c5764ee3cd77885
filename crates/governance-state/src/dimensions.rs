//! The five state dimensions and their values.
//!
//! Each dimension has exactly five values, so the full space holds
//! 5^5 = 3125 coordinates.

use std::fmt;

use governance_core::errors::StateError;
use serde::{Deserialize, Serialize};

/// Declare a dimension's value enum with its wire names, in declared order.
macro_rules! state_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $tag:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// All values in declared order.
            pub const ALL: [$name; governance_core::constants::STATE_DIMENSION_CARDINALITY] =
                [$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $tag),+
                }
            }

            pub fn from_str_name(s: &str) -> Option<Self> {
                match s {
                    $($tag => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

state_enum!(
    /// Where a decision is in its lifecycle.
    DecisionState {
        PendingApproval => "pending_approval",
        Approved => "approved",
        InExecution => "in_execution",
        Completed => "completed",
        RolledBack => "rolled_back",
    }
);

state_enum!(
    /// Assessed risk level.
    RiskState {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
        Unknown => "unknown",
    }
);

state_enum!(
    /// Compliance standing.
    ComplianceState {
        Compliant => "compliant",
        NonCompliant => "non_compliant",
        NeedsModification => "needs_modification",
        PendingVerification => "pending_verification",
        Exempted => "exempted",
    }
);

state_enum!(
    /// Resource availability.
    ResourceState {
        Sufficient => "sufficient",
        Insufficient => "insufficient",
        Optimizing => "optimizing",
        Monitoring => "monitoring",
        Alert => "alert",
    }
);

state_enum!(
    /// Timeline standing.
    TimeState {
        OnSchedule => "on_schedule",
        Delayed => "delayed",
        Accelerated => "accelerated",
        Blocked => "blocked",
        Cancelled => "cancelled",
    }
);

/// One axis of the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Decision,
    Risk,
    Compliance,
    Resource,
    Time,
}

impl Dimension {
    pub const ALL: [Dimension; governance_core::constants::STATE_DIMENSION_COUNT] = [
        Self::Decision,
        Self::Risk,
        Self::Compliance,
        Self::Resource,
        Self::Time,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "decision",
            Self::Risk => "risk",
            Self::Compliance => "compliance",
            Self::Resource => "resource",
            Self::Time => "time",
        }
    }

    /// Parse a dimension name.
    pub fn parse(name: &str) -> Result<Self, StateError> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == name)
            .ok_or_else(|| StateError::UnknownDimension {
                name: name.to_string(),
            })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value on a specific dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionValue {
    Decision(DecisionState),
    Risk(RiskState),
    Compliance(ComplianceState),
    Resource(ResourceState),
    Time(TimeState),
}

impl DimensionValue {
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Decision(_) => Dimension::Decision,
            Self::Risk(_) => Dimension::Risk,
            Self::Compliance(_) => Dimension::Compliance,
            Self::Resource(_) => Dimension::Resource,
            Self::Time(_) => Dimension::Time,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision(v) => v.as_str(),
            Self::Risk(v) => v.as_str(),
            Self::Compliance(v) => v.as_str(),
            Self::Resource(v) => v.as_str(),
            Self::Time(v) => v.as_str(),
        }
    }

    /// Parse `value` as a value of the dimension named `dimension`.
    ///
    /// Several names (`low`, `medium`, ...) are not unique across
    /// dimensions, so the dimension is always required.
    pub fn parse(dimension: &str, value: &str) -> Result<Self, StateError> {
        let dim = Dimension::parse(dimension)?;
        let parsed = match dim {
            Dimension::Decision => DecisionState::from_str_name(value).map(Self::Decision),
            Dimension::Risk => RiskState::from_str_name(value).map(Self::Risk),
            Dimension::Compliance => ComplianceState::from_str_name(value).map(Self::Compliance),
            Dimension::Resource => ResourceState::from_str_name(value).map(Self::Resource),
            Dimension::Time => TimeState::from_str_name(value).map(Self::Time),
        };
        parsed.ok_or_else(|| StateError::UnknownStateValue {
            dimension: dim.as_str().to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for DimensionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.dimension(), self.as_str())
    }
}

impl From<DecisionState> for DimensionValue {
    fn from(v: DecisionState) -> Self {
        Self::Decision(v)
    }
}

impl From<RiskState> for DimensionValue {
    fn from(v: RiskState) -> Self {
        Self::Risk(v)
    }
}

impl From<ComplianceState> for DimensionValue {
    fn from(v: ComplianceState) -> Self {
        Self::Compliance(v)
    }
}

impl From<ResourceState> for DimensionValue {
    fn from(v: ResourceState) -> Self {
        Self::Resource(v)
    }
}

impl From<TimeState> for DimensionValue {
    fn from(v: TimeState) -> Self {
        Self::Time(v)
    }
}
