//! Resolved request identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use membergate_core::{AccountStatus, Role, UserId};

use crate::claims::SessionClaims;

/// The identity + role + status derived from a request's credential.
///
/// A `Principal` is transient: reconstructed on every request from the
/// token (and, optionally, a live store lookup) and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    pub status: AccountStatus,
    pub session_expiry: DateTime<Utc>,
}

impl From<SessionClaims> for Principal {
    fn from(claims: SessionClaims) -> Self {
        let session_expiry = claims.expires_at();
        Self {
            id: claims.sub,
            display_name: claims.name,
            role: claims.role,
            status: claims.status,
            session_expiry,
        }
    }
}
