//! Session token claims model (wire form).

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use membergate_core::{AccountStatus, Role, UserId};

use crate::error::CredentialError;

/// Claims carried by a signed session token.
///
/// This is the minimal set the gate needs per request: identity, role,
/// status, and the validity window. Timestamps are unix seconds, the
/// shape JWT tooling on either end of the wire expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (member account id).
    pub sub: UserId,

    /// Display name, for downstream handlers and logging.
    pub name: String,

    /// Role at token-issue time.
    pub role: Role,

    /// Account status at token-issue time. May be stale by the time the
    /// token is presented; the resolver closes that gap when revalidation
    /// is enabled.
    pub status: AccountStatus,

    /// Issued-at (unix seconds).
    pub iat: i64,

    /// Expiry (unix seconds).
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(
        sub: UserId,
        name: impl Into<String>,
        role: Role,
        status: AccountStatus,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub,
            name: name.into(),
            role,
            status,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// Deterministically validate the claims' time window against `now`.
///
/// Signature verification happens in [`crate::TokenCodec`]; this checks the
/// claims themselves, with the clock passed in so expiry behavior is
/// testable without waiting.
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), CredentialError> {
    if claims.exp <= claims.iat {
        return Err(CredentialError::Malformed);
    }
    if now.timestamp() < claims.iat {
        return Err(CredentialError::Malformed);
    }
    if now.timestamp() >= claims.exp {
        return Err(CredentialError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(now: DateTime<Utc>, ttl: Duration) -> SessionClaims {
        SessionClaims::new(
            UserId::new(),
            "Alice",
            Role::User,
            AccountStatus::Active,
            now,
            ttl,
        )
    }

    #[test]
    fn valid_within_window() {
        let now = Utc::now();
        let c = claims(now, Duration::minutes(30));
        assert!(validate_claims(&c, now + Duration::minutes(29)).is_ok());
    }

    #[test]
    fn expired_at_and_after_expiry() {
        let now = Utc::now();
        let c = claims(now, Duration::minutes(30));
        assert_eq!(
            validate_claims(&c, now + Duration::minutes(30)),
            Err(CredentialError::Expired)
        );
        assert_eq!(
            validate_claims(&c, now + Duration::hours(5)),
            Err(CredentialError::Expired)
        );
    }

    #[test]
    fn inverted_time_window_is_malformed() {
        let now = Utc::now();
        let c = claims(now, Duration::minutes(-5));
        assert_eq!(validate_claims(&c, now), Err(CredentialError::Malformed));
    }

    #[test]
    fn issued_in_the_future_is_malformed() {
        let now = Utc::now();
        let c = claims(now + Duration::minutes(10), Duration::minutes(30));
        assert_eq!(validate_claims(&c, now), Err(CredentialError::Malformed));
    }
}
