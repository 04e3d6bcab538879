//! Account lifecycle status.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle status of a member account.
///
/// # Invariants
/// - `Pending` is the state at signup, before verification. Pending accounts
///   may only reach a narrow allow-list of paths.
/// - Transitions are `pending → active` (verification or admin activation)
///   and `active ⇄ inactive` (admin toggle). Transitions happen outside this
///   subsystem; the gate only reads status.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Pending,
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Pending => "pending",
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }
}

impl core::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown account status label: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for AccountStatus {
    type Err = ParseStatusError;

    /// Case-insensitive parse, same normalization boundary as [`crate::Role`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(AccountStatus::Pending),
            "active" => Ok(AccountStatus::Active),
            "inactive" => Ok(AccountStatus::Inactive),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}
