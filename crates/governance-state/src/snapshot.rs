use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::coordinate::StateCoordinate;

/// An entity's coordinate at one point in time. Snapshots are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub entity_id: String,
    /// e.g. "decision", "governance_dimension", "process".
    pub entity_type: String,
    pub coordinate: StateCoordinate,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Actor or component that requested the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggered_by: Option<String>,
    /// Synthetic event name, set on the initial snapshot only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggering_event: Option<String>,
}
