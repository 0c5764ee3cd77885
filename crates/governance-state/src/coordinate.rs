//! A point in the five-dimensional state space.

use std::fmt;
use std::str::FromStr;

use governance_core::errors::StateError;
use serde::{Deserialize, Serialize};

use crate::dimensions::{
    ComplianceState, DecisionState, Dimension, DimensionValue, ResourceState, RiskState, TimeState,
};

/// One value per dimension. Immutable; use [`with`](Self::with) to derive
/// a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCoordinate {
    pub decision: DecisionState,
    pub risk: RiskState,
    pub compliance: ComplianceState,
    pub resource: ResourceState,
    pub time: TimeState,
}

impl StateCoordinate {
    /// Where every tracked entity starts.
    pub const INITIAL: StateCoordinate = StateCoordinate {
        decision: DecisionState::PendingApproval,
        risk: RiskState::Unknown,
        compliance: ComplianceState::PendingVerification,
        resource: ResourceState::Monitoring,
        time: TimeState::OnSchedule,
    };

    pub fn new(
        decision: DecisionState,
        risk: RiskState,
        compliance: ComplianceState,
        resource: ResourceState,
        time: TimeState,
    ) -> Self {
        Self {
            decision,
            risk,
            compliance,
            resource,
            time,
        }
    }

    /// Value on one dimension.
    pub fn get(&self, dimension: Dimension) -> DimensionValue {
        match dimension {
            Dimension::Decision => self.decision.into(),
            Dimension::Risk => self.risk.into(),
            Dimension::Compliance => self.compliance.into(),
            Dimension::Resource => self.resource.into(),
            Dimension::Time => self.time.into(),
        }
    }

    /// Copy of this coordinate with one dimension replaced.
    pub fn with(self, value: impl Into<DimensionValue>) -> Self {
        let mut next = self;
        match value.into() {
            DimensionValue::Decision(v) => next.decision = v,
            DimensionValue::Risk(v) => next.risk = v,
            DimensionValue::Compliance(v) => next.compliance = v,
            DimensionValue::Resource(v) => next.resource = v,
            DimensionValue::Time(v) => next.time = v,
        }
        next
    }

    /// Dimensions on which `self` and `other` differ.
    pub fn differing_dimensions(&self, other: &StateCoordinate) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|d| self.get(*d) != other.get(*d))
            .collect()
    }
}

impl Default for StateCoordinate {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl fmt::Display for StateCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[D:{} | R:{} | C:{} | Rs:{} | T:{}]",
            self.decision, self.risk, self.compliance, self.resource, self.time
        )
    }
}

/// Parses the `Display` form, `[D:.. | R:.. | C:.. | Rs:.. | T:..]`.
impl FromStr for StateCoordinate {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim().trim_start_matches('[').trim_end_matches(']');
        let mut coordinate = StateCoordinate::INITIAL;
        let mut seen = Vec::with_capacity(Dimension::ALL.len());

        for part in inner.split('|') {
            let (label, value) = part.trim().split_once(':').ok_or_else(|| {
                StateError::UnknownDimension {
                    name: part.trim().to_string(),
                }
            })?;
            let dimension = match label {
                "D" => Dimension::Decision,
                "R" => Dimension::Risk,
                "C" => Dimension::Compliance,
                "Rs" => Dimension::Resource,
                "T" => Dimension::Time,
                other => Dimension::parse(other)?,
            };
            coordinate = coordinate.with(DimensionValue::parse(dimension.as_str(), value.trim())?);
            seen.push(dimension);
        }

        if let Some(missing) = Dimension::ALL.into_iter().find(|d| !seen.contains(d)) {
            return Err(StateError::UnknownStateValue {
                dimension: missing.as_str().to_string(),
                value: String::new(),
            });
        }
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_report_format() {
        assert_eq!(
            StateCoordinate::INITIAL.to_string(),
            "[D:pending_approval | R:unknown | C:pending_verification | Rs:monitoring | T:on_schedule]"
        );
    }

    #[test]
    fn display_parses_back() {
        let coordinate = StateCoordinate::INITIAL
            .with(DecisionState::Completed)
            .with(RiskState::High);
        let parsed: StateCoordinate = coordinate.to_string().parse().unwrap();
        assert_eq!(parsed, coordinate);
    }

    #[test]
    fn parse_rejects_missing_dimension() {
        let err = "[D:approved | R:low]".parse::<StateCoordinate>().unwrap_err();
        assert!(matches!(err, StateError::UnknownStateValue { .. }));
    }

    #[test]
    fn with_touches_one_dimension() {
        let next = StateCoordinate::INITIAL.with(TimeState::Delayed);
        assert_eq!(
            StateCoordinate::INITIAL.differing_dimensions(&next),
            vec![Dimension::Time]
        );
        assert_eq!(next.get(Dimension::Time), DimensionValue::Time(TimeState::Delayed));
    }
}
