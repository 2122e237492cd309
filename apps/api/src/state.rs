use parkwatch_application::FacilityService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub facility_service: FacilityService,
}
