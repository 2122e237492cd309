use async_trait::async_trait;
use parkwatch_application::{AccessTokenIssuer, IssuedToken};
use parkwatch_core::{AppError, AppResult, ClientCredentials};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tracing::{info, warn};
use url::Url;

/// Settings for the OAuth2 client-credentials exchange.
#[derive(Debug, Clone)]
pub struct ClientCredentialsConfig {
    /// Token endpoint.
    pub token_url: Url,
    /// Client id and secret sent with every token request.
    pub credentials: ClientCredentials,
    /// Scope requested for the token.
    pub scope: String,
}

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    access_token: String,
    expires_in: i64,
}

/// HTTP implementation of the client-credentials grant.
pub struct HttpClientCredentialsIssuer {
    http_client: reqwest::Client,
    config: ClientCredentialsConfig,
}

impl HttpClientCredentialsIssuer {
    /// Creates a token issuer.
    #[must_use]
    pub fn new(http_client: reqwest::Client, config: ClientCredentialsConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    fn form_body(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", self.config.credentials.client_id())
            .append_pair("client_secret", self.config.credentials.client_secret())
            .append_pair("grant_type", "client_credentials")
            .append_pair("response_type", "id_token")
            .append_pair("scope", self.config.scope.as_str())
            .finish()
    }
}

#[async_trait]
impl AccessTokenIssuer for HttpClientCredentialsIssuer {
    async fn issue_token(&self) -> AppResult<IssuedToken> {
        let response = self
            .http_client
            .post(self.config.token_url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(self.form_body())
            .send()
            .await
            .map_err(|error| AppError::Authentication(format!("token request failed: {error}")))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "token endpoint rejected client credentials");
            return Err(AppError::Authentication(format!(
                "token endpoint returned status {status}"
            )));
        }

        let body = response.text().await.map_err(|error| {
            AppError::Authentication(format!("failed to read token response: {error}"))
        })?;
        let payload = serde_json::from_str::<TokenEndpointResponse>(&body).map_err(|error| {
            AppError::Authentication(format!("malformed token response: {error}"))
        })?;

        info!(expires_in = payload.expires_in, "access token issued");

        Ok(IssuedToken {
            access_token: payload.access_token,
            expires_in_seconds: payload.expires_in,
        })
    }
}
