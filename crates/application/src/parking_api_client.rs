use std::sync::Arc;

use parkwatch_core::AppResult;
use parkwatch_domain::ResourcePath;
use serde_json::Value;

use crate::access_token_service::AccessTokenService;
use crate::parking_ports::ParkingApiGateway;

/// Authenticated reader for the parking resource API.
#[derive(Clone)]
pub struct ParkingApiClient {
    tokens: AccessTokenService,
    gateway: Arc<dyn ParkingApiGateway>,
}

impl ParkingApiClient {
    /// Creates a client that signs every request with the cached token.
    #[must_use]
    pub fn new(tokens: AccessTokenService, gateway: Arc<dyn ParkingApiGateway>) -> Self {
        Self { tokens, gateway }
    }

    /// Fetches `path` with a bearer token and returns the JSON body.
    pub async fn api_get(&self, path: &ResourcePath) -> AppResult<Value> {
        let token = self.tokens.ensure_token().await?;
        self.gateway.get_json(path, token.value()).await
    }
}
