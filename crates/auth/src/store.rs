//! Identity-store collaborator interface.
//!
//! The real backing store (relational, behind an ORM-ish layer) is out of
//! scope; the gate consumes lookups through this trait. Implementations
//! are injected where the resolver is constructed; there is no ambient
//! global client.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use membergate_core::{AccountStatus, Role, UserId};

use crate::error::StoreError;

/// Current role/status of a member account as known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// Lookup interface onto the identity store.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Fetch the current record for `id`, or `None` if unknown.
    async fn find_by_id(&self, id: UserId) -> Result<Option<AccountRecord>, StoreError>;
}

/// In-memory store for dev wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    accounts: RwLock<HashMap<UserId, AccountRecord>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Lock poisoning is ignored: the map holds plain records, so a panic
    // mid-write cannot leave them in a broken state, and one panicked
    // caller must not wedge every later lookup.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<UserId, AccountRecord>> {
        self.accounts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<UserId, AccountRecord>> {
        self.accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, record: AccountRecord) {
        self.write().insert(record.id, record);
    }

    /// Flip an account's status; returns false if the account is unknown.
    pub fn set_status(&self, id: UserId, status: AccountStatus) -> bool {
        match self.write().get_mut(&id) {
            Some(record) => {
                record.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: UserId) -> Option<AccountRecord> {
        self.write().remove(&id)
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<AccountRecord>, StoreError> {
        Ok(self.read().get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: UserId) -> AccountRecord {
        AccountRecord {
            id,
            display_name: "Alice".to_string(),
            role: Role::User,
            status: AccountStatus::Active,
        }
    }

    #[test]
    fn poisoned_lock_does_not_wedge_the_store() {
        let store = InMemoryIdentityStore::new();
        let id = UserId::new();
        store.insert(record(id));

        // Panic while holding the write lock to poison it.
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = store.accounts.write().unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());

        // The store keeps serving.
        assert!(store.set_status(id, AccountStatus::Inactive));
        assert_eq!(store.remove(id).map(|r| r.status), Some(AccountStatus::Inactive));
    }
}
