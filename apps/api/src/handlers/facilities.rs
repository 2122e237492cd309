use axum::Json;
use axum::extract::{Path, State};
use parkwatch_domain::FacilityId;
use serde_json::Value;

use crate::dto::CombinedOccupationResponse;
use crate::error::ApiResult;
use crate::state::AppState;


pub async fn list_facilities_handler(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let facilities = state.facility_service.facilities().await?;
    Ok(Json(facilities))
}

pub async fn facility_occupation_handler(
    State(state): State<AppState>,
    Path(facility_id): Path<String>,
) -> ApiResult<Json<CombinedOccupationResponse>> {
    let facility_id = FacilityId::new(facility_id)?;
    let occupation = state.facility_service.occupation(&facility_id).await?;

    Ok(Json(CombinedOccupationResponse::from(occupation)))
}

pub async fn facility_capacity_handler(
    State(state): State<AppState>,
    Path(facility_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let facility_id = FacilityId::new(facility_id)?;
    let capacity = state.facility_service.capacity(&facility_id).await?;

    Ok(Json(capacity))
}
