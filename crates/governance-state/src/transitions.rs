//! Per-dimension transition policy and the outcome of a transition attempt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::StateCoordinate;
use crate::dimensions::{ComplianceState, DecisionState, Dimension, DimensionValue};

/// How moves along a dimension are policed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPolicy {
    /// Only moves listed in a static adjacency table are allowed.
    Table,
    /// Every move goes through the dimension's validator.
    Validated,
    /// Any value may follow any value.
    Unrestricted,
}

impl TransitionPolicy {
    pub fn for_dimension(dimension: Dimension) -> Self {
        match dimension {
            Dimension::Decision => Self::Table,
            Dimension::Compliance => Self::Validated,
            Dimension::Risk | Dimension::Resource | Dimension::Time => Self::Unrestricted,
        }
    }

    /// Whether moves under this policy are checked at all.
    pub fn is_enforced(&self) -> bool {
        !matches!(self, Self::Unrestricted)
    }
}

/// Decision moves allowed from `from`. `RolledBack` is terminal.
pub fn allowed_decision_targets(from: DecisionState) -> &'static [DecisionState] {
    use DecisionState::*;
    match from {
        PendingApproval => &[Approved, RolledBack],
        Approved => &[InExecution, RolledBack],
        InExecution => &[Completed, RolledBack],
        Completed => &[RolledBack],
        RolledBack => &[],
    }
}

/// Whether the decision lifecycle allows `from → to`. Staying put is not a
/// move in the table and is rejected.
pub fn is_valid_decision_transition(from: DecisionState, to: DecisionState) -> bool {
    allowed_decision_targets(from).contains(&to)
}

/// Compliance has no enforced policy yet: every move is valid.
pub fn is_valid_compliance_transition(_from: ComplianceState, _to: ComplianceState) -> bool {
    true
}

/// Why a transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TransitionRejection {
    UnknownEntity {
        entity_id: String,
    },
    InvalidDecisionTransition {
        from: DecisionState,
        to: DecisionState,
    },
    InvalidComplianceTransition {
        from: ComplianceState,
        to: ComplianceState,
    },
}

impl fmt::Display for TransitionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEntity { entity_id } => write!(f, "entity '{entity_id}' is not tracked"),
            Self::InvalidDecisionTransition { from, to } => {
                write!(f, "decision cannot move from {from} to {to}")
            }
            Self::InvalidComplianceTransition { from, to } => {
                write!(f, "compliance cannot move from {from} to {to}")
            }
        }
    }
}

/// Result of [`StateSpace::transition`](crate::StateSpace::transition).
/// A rejection is an expected outcome, not an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Applied(StateCoordinate),
    Rejected(TransitionRejection),
}

impl TransitionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn rejection(&self) -> Option<&TransitionRejection> {
        match self {
            Self::Rejected(reason) => Some(reason),
            Self::Applied(_) => None,
        }
    }
}

/// Check a move against every dimension's policy, in dimension order.
/// The first refused dimension decides the rejection.
pub(crate) fn check(
    current: &StateCoordinate,
    next: &StateCoordinate,
) -> Result<(), TransitionRejection> {
    Dimension::ALL
        .into_iter()
        .filter(|dimension| TransitionPolicy::for_dimension(*dimension).is_enforced())
        .try_for_each(|dimension| check_move(current.get(dimension), next.get(dimension)))
}

fn check_move(from: DimensionValue, to: DimensionValue) -> Result<(), TransitionRejection> {
    match (from, to) {
        (DimensionValue::Decision(from), DimensionValue::Decision(to))
            if !is_valid_decision_transition(from, to) =>
        {
            Err(TransitionRejection::InvalidDecisionTransition { from, to })
        }
        (DimensionValue::Compliance(from), DimensionValue::Compliance(to))
            if !is_valid_compliance_transition(from, to) =>
        {
            Err(TransitionRejection::InvalidComplianceTransition { from, to })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rolled_back_is_terminal() {
        for to in DecisionState::ALL {
            assert!(!is_valid_decision_transition(DecisionState::RolledBack, to));
        }
    }

    #[test]
    fn every_live_state_can_roll_back() {
        for from in DecisionState::ALL {
            if from != DecisionState::RolledBack {
                assert!(is_valid_decision_transition(from, DecisionState::RolledBack));
            }
        }
    }

    #[test]
    fn approval_cannot_be_skipped() {
        assert!(!is_valid_decision_transition(
            DecisionState::PendingApproval,
            DecisionState::InExecution
        ));
        assert!(is_valid_decision_transition(
            DecisionState::PendingApproval,
            DecisionState::Approved
        ));
    }

    #[test]
    fn only_decision_uses_a_table() {
        for dimension in Dimension::ALL {
            let expected = match dimension {
                Dimension::Decision => TransitionPolicy::Table,
                Dimension::Compliance => TransitionPolicy::Validated,
                _ => TransitionPolicy::Unrestricted,
            };
            assert_eq!(TransitionPolicy::for_dimension(dimension), expected);
        }
        assert!(!TransitionPolicy::Unrestricted.is_enforced());
    }

    #[test]
    fn check_consults_each_enforced_dimension() {
        use crate::dimensions::{ResourceState, RiskState, TimeState};

        let start = StateCoordinate::INITIAL;
        // Unrestricted dimensions may jump anywhere alongside a legal decision move.
        let jump = StateCoordinate::new(
            DecisionState::Approved,
            RiskState::Critical,
            ComplianceState::NonCompliant,
            ResourceState::Alert,
            TimeState::Cancelled,
        );
        assert_eq!(check(&start, &jump), Ok(()));

        // The table still refuses a skipped step whatever else changes.
        let skipped = jump.with(DecisionState::Completed);
        assert_eq!(
            check(&start, &skipped),
            Err(TransitionRejection::InvalidDecisionTransition {
                from: DecisionState::PendingApproval,
                to: DecisionState::Completed,
            })
        );

        // Only unrestricted dimensions change: the decision self-move is refused.
        let risk_only = start.with(RiskState::High);
        assert!(matches!(
            check(&start, &risk_only),
            Err(TransitionRejection::InvalidDecisionTransition { .. })
        ));
    }

    #[test]
    fn rejection_serializes_with_reason_tag() {
        let rejection = TransitionRejection::InvalidDecisionTransition {
            from: DecisionState::RolledBack,
            to: DecisionState::Approved,
        };
        let value = serde_json::to_value(&rejection).unwrap();
        assert_eq!(value["reason"], "invalid_decision_transition");
        assert_eq!(value["from"], "rolled_back");
    }
}
