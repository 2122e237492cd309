use serde::{Deserialize, Serialize};

/// Current occupation counts reported for one facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationSnapshot {
    /// Spaces taken by subscription holders.
    pub subscriber_occupation: i64,
    /// Spaces taken by short-stay visitors.
    pub transient_occupation: i64,
    /// All occupied spaces.
    pub total_occupation: i64,
}

/// Capacity reported for one facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySnapshot {
    /// Number of spaces in the facility.
    pub total_capacity: i64,
}

/// Occupation and capacity of the same facility in one view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedOccupation {
    /// Spaces taken by subscription holders.
    pub subscriber_occupation: i64,
    /// Spaces taken by short-stay visitors.
    pub transient_occupation: i64,
    /// All occupied spaces.
    pub total_occupation: i64,
    /// Number of spaces in the facility.
    pub total_capacity: i64,
}

impl CombinedOccupation {
    /// Merges the two upstream responses for one facility.
    #[must_use]
    pub fn merge(occupation: OccupationSnapshot, capacity: CapacitySnapshot) -> Self {
        Self {
            subscriber_occupation: occupation.subscriber_occupation,
            transient_occupation: occupation.transient_occupation,
            total_occupation: occupation.total_occupation,
            total_capacity: capacity.total_capacity,
        }
    }
}
