use parkwatch_core::{AppError, AppResult};
use parkwatch_domain::{
    CapacitySnapshot, CombinedOccupation, FacilityId, OccupationSnapshot, ResourcePath,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::parking_api_client::ParkingApiClient;


/// Read-only facility queries exposed to the browser client.
#[derive(Clone)]
pub struct FacilityService {
    client: ParkingApiClient,
}

impl FacilityService {
    /// Creates a facility service.
    #[must_use]
    pub fn new(client: ParkingApiClient) -> Self {
        Self { client }
    }

    /// Returns the upstream facility list unmodified.
    pub async fn facilities(&self) -> AppResult<Value> {
        self.client.api_get(&ResourcePath::facilities()).await
    }

    /// Returns occupation counts merged with the facility capacity.
    ///
    /// Both upstream calls run one after the other; a failure in either fails
    /// the whole request.
    pub async fn occupation(&self, facility_id: &FacilityId) -> AppResult<CombinedOccupation> {
        let occupation_path = ResourcePath::facility_occupation(facility_id);
        let occupation = self.client.api_get(&occupation_path).await?;
        let occupation: OccupationSnapshot = decode(&occupation_path, &occupation)?;

        let capacity_path = ResourcePath::facility_capacity(facility_id);
        let capacity = self.client.api_get(&capacity_path).await?;
        let capacity: CapacitySnapshot = decode(&capacity_path, &capacity)?;

        Ok(CombinedOccupation::merge(occupation, capacity))
    }

    /// Returns the upstream capacity body unmodified once it has the expected shape.
    pub async fn capacity(&self, facility_id: &FacilityId) -> AppResult<Value> {
        let path = ResourcePath::facility_capacity(facility_id);
        let capacity = self.client.api_get(&path).await?;
        decode::<CapacitySnapshot>(&path, &capacity)?;

        Ok(capacity)
    }
}

fn decode<T: DeserializeOwned>(path: &ResourcePath, body: &Value) -> AppResult<T> {
    T::deserialize(body).map_err(|error| {
        AppError::upstream(format!("unexpected response shape from {path}: {error}"))
    })
}
