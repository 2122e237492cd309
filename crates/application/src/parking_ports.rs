use async_trait::async_trait;
use parkwatch_core::AppResult;
use parkwatch_domain::ResourcePath;
use serde_json::Value;

/// Token as returned by the auth endpoint, before it is stamped with an issue time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    /// Opaque bearer value.
    pub access_token: String,
    /// Validity in seconds counted from the request.
    pub expires_in_seconds: i64,
}

/// Port for the OAuth2 client-credentials exchange.
#[async_trait]
pub trait AccessTokenIssuer: Send + Sync {
    /// Requests a fresh access token.
    ///
    /// Fails with `AppError::Authentication` on non-success status or a
    /// malformed body.
    async fn issue_token(&self) -> AppResult<IssuedToken>;
}

/// Port for authenticated reads against the parking resource API.
#[async_trait]
pub trait ParkingApiGateway: Send + Sync {
    /// Issues a GET for `path` and returns the decoded JSON body.
    ///
    /// Fails with `AppError::Upstream` on non-success status, transport
    /// failure or a body that is not JSON.
    async fn get_json(&self, path: &ResourcePath, bearer_token: &str) -> AppResult<Value>;
}
