use chrono::{DateTime, TimeDelta, Utc};
use parkwatch_core::{AppError, AppResult, NonEmptyString};

/// Seconds before expiry at which a token is no longer handed out.
pub const TOKEN_EXPIRY_SAFETY_MARGIN_SECONDS: i64 = 60;

/// Bearer token issued by the upstream auth endpoint.
///
/// A token is replaced wholesale on refresh and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: NonEmptyString,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token issued at `issued_at` that stays valid for `valid_for_seconds`.
    pub fn new(
        value: impl Into<String>,
        issued_at: DateTime<Utc>,
        valid_for_seconds: i64,
    ) -> AppResult<Self> {
        let value = NonEmptyString::new(value).map_err(|_| {
            AppError::Authentication("token endpoint returned an empty access_token".to_owned())
        })?;
        if valid_for_seconds < 0 {
            return Err(AppError::Authentication(format!(
                "token endpoint returned a negative expires_in: {valid_for_seconds}"
            )));
        }

        let expires_at = TimeDelta::try_seconds(valid_for_seconds)
            .and_then(|validity| issued_at.checked_add_signed(validity))
            .ok_or_else(|| {
                AppError::Authentication(format!(
                    "token endpoint returned an out of range expires_in: {valid_for_seconds}"
                ))
            })?;

        Ok(Self {
            value,
            issued_at,
            expires_at,
        })
    }

    /// Returns the opaque bearer value.
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns when the token was obtained.
    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the auth endpoint considers the token expired.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns whether the token may still be sent at `now`.
    ///
    /// Usable while `now < expires_at - 60s`.
    #[must_use]
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        let margin = TimeDelta::seconds(TOKEN_EXPIRY_SAFETY_MARGIN_SECONDS);
        self.expires_at
            .checked_sub_signed(margin)
            .is_some_and(|refresh_at| now < refresh_at)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, Utc};
    use proptest::prelude::*;

    use super::AccessToken;

    fn fixed_instant() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_default()
    }

    #[test]
    fn expiry_is_issue_time_plus_validity() -> Result<(), parkwatch_core::AppError> {
        let issued_at = fixed_instant();
        let token = AccessToken::new("abc", issued_at, 3600)?;

        assert_eq!(token.expires_at() - issued_at, TimeDelta::seconds(3600));
        assert_eq!(token.value(), "abc");
        Ok(())
    }

    #[test]
    fn token_stops_being_usable_sixty_seconds_before_expiry()
    -> Result<(), parkwatch_core::AppError> {
        let issued_at = fixed_instant();
        let token = AccessToken::new("abc", issued_at, 3600)?;

        assert!(token.is_usable_at(issued_at + TimeDelta::seconds(3539)));
        assert!(!token.is_usable_at(issued_at + TimeDelta::seconds(3540)));
        Ok(())
    }

    #[test]
    fn short_lived_token_is_never_usable() -> Result<(), parkwatch_core::AppError> {
        let issued_at = fixed_instant();
        let token = AccessToken::new("abc", issued_at, 30)?;

        assert!(!token.is_usable_at(issued_at));
        Ok(())
    }

    #[test]
    fn empty_or_negative_tokens_are_rejected() {
        assert!(AccessToken::new("", fixed_instant(), 3600).is_err());
        assert!(AccessToken::new("abc", fixed_instant(), -1).is_err());
    }

    proptest! {
        #[test]
        fn usability_matches_safety_margin(validity in 0_i64..100_000, elapsed in 0_i64..100_000) {
            let issued_at = fixed_instant();
            let token = AccessToken::new("abc", issued_at, validity);
            prop_assert!(token.is_ok());
            if let Ok(token) = token {
                let now = issued_at + TimeDelta::seconds(elapsed);
                prop_assert_eq!(token.is_usable_at(now), elapsed < validity - 60);
            }
        }
    }
}
