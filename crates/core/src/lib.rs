//! Shared primitives for all Rust crates in parkwatch.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::ClientCredentials;

/// Result type used across parkwatch crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input, configuration or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Access token could not be acquired from the auth endpoint.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Resource API answered with a failure or an unusable body.
    #[error("{}", upstream_message(*status, body))]
    Upstream {
        /// HTTP status returned upstream, absent for transport and decode failures.
        status: Option<u16>,
        /// Raw response body or failure detail.
        body: String,
    },

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds an upstream error without a response status.
    #[must_use]
    pub fn upstream(body: impl Into<String>) -> Self {
        Self::Upstream {
            status: None,
            body: body.into(),
        }
    }
}

fn upstream_message(status: Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("upstream request failed with status {status}: {body}"),
        None => format!("upstream request failed: {body}"),
    }
}
