//! Closed role set for access control.
//!
//! The backing store historically carried role labels with inconsistent
//! casing (`admin`, `ADMIN`, `Admin`). Normalization happens exactly once,
//! at the `FromStr` boundary; everywhere past that point roles are this
//! closed enum. Roles are compared by set membership, never by ordering;
//! `Staff` is not "more" than `User`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role assigned to a member account.
///
/// Assigned at account creation and changed only by an admin-level
/// mutation (outside this subsystem).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    User,
    Guest,
}

impl Role {
    /// Canonical lowercase label (the wire form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Staff => "staff",
            Role::User => "user",
            Role::Guest => "guest",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role label: {0}")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Case-insensitive parse. This is the single normalization step for
    /// role labels coming from the identity store or legacy data.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "staff" => Ok(Role::Staff),
            "user" => Ok(Role::User),
            "guest" => Ok(Role::Guest),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}
