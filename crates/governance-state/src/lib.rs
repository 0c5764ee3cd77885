//! # governance-state
//!
//! Tracks every governed entity as a point in a five-dimensional state
//! space (decision, risk, compliance, resource, time), enforces the decision
//! lifecycle on transitions, and keeps an append-only snapshot history.

pub mod coordinate;
pub mod dimensions;
pub mod snapshot;
pub mod space;
pub mod transitions;

pub use coordinate::StateCoordinate;
pub use dimensions::{
    ComplianceState, DecisionState, Dimension, DimensionValue, ResourceState, RiskState, TimeState,
};
pub use snapshot::StateSnapshot;
pub use space::{StateSpace, StateSpaceDocument};
pub use transitions::{TransitionOutcome, TransitionPolicy, TransitionRejection};
