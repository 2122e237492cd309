use std::fmt::{Debug, Formatter};

use crate::{AppResult, NonEmptyString};

/// OAuth2 client-credentials pair used to request access tokens.
///
/// The secret never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    client_id: NonEmptyString,
    client_secret: NonEmptyString,
}

impl ClientCredentials {
    /// Creates validated client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> AppResult<Self> {
        Ok(Self {
            client_id: NonEmptyString::new(client_id)?,
            client_secret: NonEmptyString::new(client_secret)?,
        })
    }

    /// Returns the client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        self.client_id.as_str()
    }

    /// Returns the client secret.
    #[must_use]
    pub fn client_secret(&self) -> &str {
        self.client_secret.as_str()
    }
}

impl Debug for ClientCredentials {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ClientCredentials")
            .field("client_id", &self.client_id.as_str())
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
