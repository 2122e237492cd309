use std::sync::Arc;

use parkwatch_application::{
    AccessTokenIssuer, AccessTokenService, FacilityService, ParkingApiClient, ParkingApiGateway,
};
use parkwatch_core::AppError;
use parkwatch_infrastructure::{
    ClientCredentialsConfig, HttpClientCredentialsIssuer, HttpParkingApiGateway,
};

use crate::api_config::ApiConfig;
use crate::state::AppState;

pub fn build_app_state(config: &ApiConfig) -> Result<AppState, AppError> {
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

    let token_issuer: Arc<dyn AccessTokenIssuer> = Arc::new(HttpClientCredentialsIssuer::new(
        http_client.clone(),
        ClientCredentialsConfig {
            token_url: config.auth_url.clone(),
            credentials: config.credentials.clone(),
            scope: config.auth_scope.clone(),
        },
    ));
    let gateway: Arc<dyn ParkingApiGateway> = Arc::new(HttpParkingApiGateway::new(
        http_client,
        config.api_url.clone(),
    )?);

    Ok(state_from_ports(token_issuer, gateway))
}

pub fn state_from_ports(
    token_issuer: Arc<dyn AccessTokenIssuer>,
    gateway: Arc<dyn ParkingApiGateway>,
) -> AppState {
    let access_token_service = AccessTokenService::new(token_issuer);
    let parking_api_client = ParkingApiClient::new(access_token_service, gateway);

    AppState {
        facility_service: FacilityService::new(parking_api_client),
    }
}
