use parkwatch_domain::CombinedOccupation;
use serde::Serialize;
use ts_rs::TS;

/// Occupation counts of one facility together with its capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/combined-occupation-response.ts"
)]
pub struct CombinedOccupationResponse {
    #[ts(type = "number")]
    pub subscriber_occupation: i64,
    #[ts(type = "number")]
    pub transient_occupation: i64,
    #[ts(type = "number")]
    pub total_occupation: i64,
    #[ts(type = "number")]
    pub total_capacity: i64,
}

impl From<CombinedOccupation> for CombinedOccupationResponse {
    fn from(value: CombinedOccupation) -> Self {
        Self {
            subscriber_occupation: value.subscriber_occupation,
            transient_occupation: value.transient_occupation,
            total_occupation: value.total_occupation,
            total_capacity: value.total_capacity,
        }
    }
}
