use std::sync::Arc;

use chrono::{DateTime, Utc};
use parkwatch_core::AppResult;
use parkwatch_domain::AccessToken;
use tokio::sync::{Mutex, MutexGuard};

use crate::parking_ports::AccessTokenIssuer;


/// Process-wide cache for the upstream bearer token.
///
/// Checking and refreshing happen under one lock, so callers that arrive
/// during a refresh wait for it and reuse its result.
#[derive(Clone)]
pub struct AccessTokenService {
    issuer: Arc<dyn AccessTokenIssuer>,
    cached: Arc<Mutex<Option<AccessToken>>>,
}

impl AccessTokenService {
    /// Creates a token service with an empty cache.
    #[must_use]
    pub fn new(issuer: Arc<dyn AccessTokenIssuer>) -> Self {
        Self {
            issuer,
            cached: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns a usable token, requesting a new one when needed.
    pub async fn ensure_token(&self) -> AppResult<AccessToken> {
        let mut cached = self.cached.lock().await;
        let now = Utc::now();
        self.refresh_if_needed(&mut cached, now).await
    }

    /// Same as [`Self::ensure_token`] with an explicit clock reading.
    pub async fn ensure_token_at(&self, now: DateTime<Utc>) -> AppResult<AccessToken> {
        let mut cached = self.cached.lock().await;
        self.refresh_if_needed(&mut cached, now).await
    }

    /// Returns the currently cached token, usable or not.
    pub async fn cached_token(&self) -> Option<AccessToken> {
        self.cached.lock().await.clone()
    }

    async fn refresh_if_needed(
        &self,
        cached: &mut MutexGuard<'_, Option<AccessToken>>,
        now: DateTime<Utc>,
    ) -> AppResult<AccessToken> {
        if let Some(token) = cached.as_ref().filter(|token| token.is_usable_at(now)) {
            return Ok(token.clone());
        }

        let issued = self.issuer.issue_token().await?;
        let token = AccessToken::new(issued.access_token, now, issued.expires_in_seconds)?;
        **cached = Some(token.clone());

        Ok(token)
    }
}
