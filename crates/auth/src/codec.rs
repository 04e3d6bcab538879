//! Signed session token codec (HS256).

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::claims::{SessionClaims, validate_claims};
use crate::error::CredentialError;
use crate::principal::Principal;

/// Encodes and verifies session tokens.
///
/// Pure function of input + secret + clock: no I/O, no panics past the
/// boundary. Every decode failure (malformed input, bad signature,
/// expiry) comes back as a [`CredentialError`] that callers must treat
/// as "no credential".
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Serialize and sign `claims` into an opaque token string.
    pub fn issue(&self, claims: &SessionClaims) -> Result<String, CredentialError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding).map_err(|e| {
            tracing::error!(error = %e, "failed to encode session token");
            CredentialError::Malformed
        })
    }

    /// Verify signature integrity and the validity window against `now`.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, CredentialError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked deterministically via `validate_claims` so the
        // clock can be injected in tests.
        validation.validate_exp = false;

        let data = decode::<SessionClaims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => CredentialError::BadSignature,
                ErrorKind::ExpiredSignature => CredentialError::Expired,
                _ => {
                    tracing::debug!(error = %e, "session token decode failed");
                    CredentialError::Malformed
                }
            }
        })?;

        validate_claims(&data.claims, now)?;
        Ok(Principal::from(data.claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use membergate_core::{AccountStatus, Role, UserId};

    fn codec() -> TokenCodec {
        TokenCodec::new(b"unit-test-secret")
    }

    fn claims(now: DateTime<Utc>, ttl: Duration) -> SessionClaims {
        SessionClaims::new(
            UserId::new(),
            "Alice",
            Role::Staff,
            AccountStatus::Active,
            now,
            ttl,
        )
    }

    #[test]
    fn round_trip_before_expiry() {
        let codec = codec();
        let now = Utc::now();
        let claims = claims(now, Duration::minutes(10));

        let token = codec.issue(&claims).unwrap();
        let principal = codec.verify(&token, now + Duration::minutes(5)).unwrap();

        assert_eq!(principal.id, claims.sub);
        assert_eq!(principal.display_name, "Alice");
        assert_eq!(principal.role, Role::Staff);
        assert_eq!(principal.status, AccountStatus::Active);
        assert_eq!(principal.session_expiry, claims.expires_at());
    }

    #[test]
    fn verify_after_ttl_is_expired() {
        let codec = codec();
        let now = Utc::now();
        let token = codec.issue(&claims(now, Duration::minutes(10))).unwrap();

        let err = codec
            .verify(&token, now + Duration::minutes(10))
            .unwrap_err();
        assert_eq!(err, CredentialError::Expired);
    }

    #[test]
    fn wrong_secret_is_bad_signature() {
        let now = Utc::now();
        let token = codec().issue(&claims(now, Duration::minutes(10))).unwrap();

        let other = TokenCodec::new(b"a-different-secret");
        assert_eq!(
            other.verify(&token, now).unwrap_err(),
            CredentialError::BadSignature
        );
    }

    #[test]
    fn garbage_is_malformed_not_a_panic() {
        let codec = codec();
        let now = Utc::now();

        for garbage in ["", "not-a-token", "aaaa.bbbb", "aaaa.bbbb.cccc"] {
            assert_eq!(
                codec.verify(garbage, now).unwrap_err(),
                CredentialError::Malformed,
                "input {garbage:?} must map to Malformed"
            );
        }
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let codec = codec();
        let now = Utc::now();
        let token = codec.issue(&claims(now, Duration::minutes(10))).unwrap();

        // Swap the payload segment for a different (validly encoded) one.
        let mut parts: Vec<&str> = token.split('.').collect();
        let other = codec.issue(&claims(now, Duration::hours(9))).unwrap();
        let other_payload: Vec<&str> = other.split('.').collect();
        parts[1] = other_payload[1];
        let forged = parts.join(".");

        assert!(codec.verify(&forged, now).is_err());
    }
}
