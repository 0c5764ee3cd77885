//! StateSpace: current coordinate and snapshot history per tracked entity.

use std::collections::BTreeMap;

use chrono::Utc;
use governance_core::constants::ENTITY_CREATED_EVENT;
use governance_core::errors::StateError;
use governance_core::transition_span;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::coordinate::StateCoordinate;
use crate::dimensions::{DecisionState, Dimension, DimensionValue};
use crate::snapshot::StateSnapshot;
use crate::transitions::{self, TransitionOutcome, TransitionRejection};

#[derive(Debug, Clone)]
struct TrackedEntity {
    entity_type: String,
    current: StateCoordinate,
    /// Never empty: the initial snapshot is recorded on creation.
    history: Vec<StateSnapshot>,
}

/// Serializable view of a state space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSpaceDocument {
    pub current_states: BTreeMap<String, StateCoordinate>,
    pub snapshots: BTreeMap<String, Vec<StateSnapshot>>,
}

/// Tracks governed entities through the five-dimensional state space.
///
/// Entities are iterated in id order, so every query returns ids sorted.
#[derive(Debug, Clone, Default)]
pub struct StateSpace {
    entities: BTreeMap<String, TrackedEntity>,
}

impl StateSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an entity at [`StateCoordinate::INITIAL`].
    pub fn initialize_entity(
        &mut self,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<StateCoordinate, StateError> {
        if self.entities.contains_key(entity_id) {
            return Err(StateError::AlreadyExists {
                entity_id: entity_id.to_string(),
            });
        }

        let initial = StateCoordinate::INITIAL;
        let snapshot = StateSnapshot {
            entity_id: entity_id.to_string(),
            entity_type: entity_type.to_string(),
            coordinate: initial,
            timestamp: Utc::now(),
            metadata: BTreeMap::from([(
                "reason".to_string(),
                serde_json::Value::from("initialization"),
            )]),
            triggered_by: None,
            triggering_event: Some(ENTITY_CREATED_EVENT.to_string()),
        };
        self.entities.insert(
            entity_id.to_string(),
            TrackedEntity {
                entity_type: entity_type.to_string(),
                current: initial,
                history: vec![snapshot],
            },
        );

        info!(entity_id, entity_type, "entity initialized");
        Ok(initial)
    }

    /// Move an entity to `next`.
    ///
    /// Rejected when the entity is untracked or a dimension's policy forbids
    /// the move; a rejection changes nothing. On success a snapshot is
    /// appended and the current coordinate replaced.
    pub fn transition(
        &mut self,
        entity_id: &str,
        next: StateCoordinate,
        triggered_by: Option<&str>,
        metadata: BTreeMap<String, serde_json::Value>,
    ) -> TransitionOutcome {
        let span = transition_span!(entity_id);
        let _guard = span.enter();

        let Some(entity) = self.entities.get_mut(entity_id) else {
            debug!("transition rejected: untracked entity");
            return TransitionOutcome::Rejected(TransitionRejection::UnknownEntity {
                entity_id: entity_id.to_string(),
            });
        };
        if let Err(rejection) = transitions::check(&entity.current, &next) {
            debug!(reason = %rejection, "transition rejected");
            return TransitionOutcome::Rejected(rejection);
        }

        entity.history.push(StateSnapshot {
            entity_id: entity_id.to_string(),
            entity_type: entity.entity_type.clone(),
            coordinate: next,
            timestamp: Utc::now(),
            metadata,
            triggered_by: triggered_by.map(str::to_string),
            triggering_event: None,
        });
        debug!(from = %entity.current, to = %next, "transition applied");
        entity.current = next;
        TransitionOutcome::Applied(next)
    }

    pub fn get_current_state(&self, entity_id: &str) -> Option<StateCoordinate> {
        self.entities.get(entity_id).map(|e| e.current)
    }

    /// Every snapshot of an entity, oldest first. Empty when untracked.
    pub fn get_state_history(&self, entity_id: &str) -> &[StateSnapshot] {
        self.entities
            .get(entity_id)
            .map(|e| e.history.as_slice())
            .unwrap_or(&[])
    }

    pub fn query_entities_in_state(&self, target: &StateCoordinate) -> Vec<String> {
        self.entities
            .iter()
            .filter(|(_, e)| e.current == *target)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Entities whose current coordinate has `value` on its dimension.
    pub fn query_entities_in_dimension(&self, value: DimensionValue) -> Vec<String> {
        let dimension = value.dimension();
        self.entities
            .iter()
            .filter(|(_, e)| e.current.get(dimension) == value)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Number of adjacent snapshots that differ on `dimension`.
    pub fn get_state_transition_count(&self, entity_id: &str, dimension: Dimension) -> usize {
        self.get_state_history(entity_id)
            .windows(2)
            .filter(|pair| pair[0].coordinate.get(dimension) != pair[1].coordinate.get(dimension))
            .count()
    }

    /// `1 − changes / (history length − 1)`, in [0, 1].
    ///
    /// 1.0 for a single snapshot, 0.0 for an untracked entity.
    pub fn get_state_stability(&self, entity_id: &str) -> f64 {
        let Some(entity) = self.entities.get(entity_id) else {
            return 0.0;
        };
        let history = &entity.history;
        if history.len() <= 1 {
            return 1.0;
        }

        let changes = history
            .windows(2)
            .filter(|pair| pair[0].coordinate != pair[1].coordinate)
            .count();
        let max_changes = (history.len() - 1) as f64;
        (1.0 - changes as f64 / max_changes).max(0.0)
    }

    /// Heuristic next coordinate: the next step of the happy-path decision
    /// lifecycle, every other dimension unchanged. `None` once the decision
    /// is completed or rolled back, or for an untracked entity.
    pub fn predict_next_state(&self, entity_id: &str) -> Option<StateCoordinate> {
        let current = self.get_current_state(entity_id)?;
        let next = match current.decision {
            DecisionState::PendingApproval => DecisionState::Approved,
            DecisionState::Approved => DecisionState::InExecution,
            DecisionState::InExecution => DecisionState::Completed,
            DecisionState::Completed | DecisionState::RolledBack => return None,
        };
        Some(current.with(next))
    }

    /// Current coordinate of every tracked entity.
    pub fn current_states(&self) -> BTreeMap<String, StateCoordinate> {
        self.entities
            .iter()
            .map(|(id, e)| (id.clone(), e.current))
            .collect()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entity_type(&self, entity_id: &str) -> Option<&str> {
        self.entities.get(entity_id).map(|e| e.entity_type.as_str())
    }

    pub fn to_document(&self) -> StateSpaceDocument {
        StateSpaceDocument {
            current_states: self.current_states(),
            snapshots: self
                .entities
                .iter()
                .map(|(id, e)| (id.clone(), e.history.clone()))
                .collect(),
        }
    }
}
