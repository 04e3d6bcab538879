//! Session resolution: raw request credentials → resolved session.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use membergate_core::AccountStatus;

use crate::codec::TokenCodec;
use crate::error::CredentialError;
use crate::principal::Principal;
use crate::store::IdentityStore;

/// Raw credentials extracted from an inbound request.
///
/// When both are present the bearer token wins: API clients send the
/// `Authorization` header and do not carry the page cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCredentials {
    pub bearer: Option<String>,
    pub cookie: Option<String>,
}

impl RequestCredentials {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            bearer: Some(token.into()),
            cookie: None,
        }
    }

    pub fn cookie(token: impl Into<String>) -> Self {
        Self {
            bearer: None,
            cookie: Some(token.into()),
        }
    }

    fn token(&self) -> Option<&str> {
        self.bearer.as_deref().or(self.cookie.as_deref())
    }
}

/// Outcome of resolving a request's credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// No credential was presented.
    Anonymous,

    /// A credential was presented and rejected. Decisions treat this
    /// exactly like [`Session::Anonymous`]; the distinction only drives
    /// cookie clearing and logging.
    Invalid(CredentialError),

    /// A credential verified (and, if enabled, revalidated).
    Authenticated(Principal),
}

impl Session {
    pub fn principal(&self) -> Option<&Principal> {
        match self {
            Session::Authenticated(p) => Some(p),
            _ => None,
        }
    }

    /// True when a credential was presented but rejected.
    pub fn is_invalid_credential(&self) -> bool {
        matches!(self, Session::Invalid(_))
    }
}

/// Whether to re-check role/status against the identity store per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevalidationMode {
    /// Trust the token's embedded role/status until expiry. Opt-in for
    /// latency-sensitive deployments; an admin-initiated deactivation
    /// only takes effect once the token expires.
    TrustToken,

    /// Re-fetch role/status from the store on every request (default).
    PerRequest,
}

/// Resolves request credentials into a [`Session`].
///
/// Built once at startup and shared across requests; holds no per-request
/// state.
#[derive(Clone)]
pub struct SessionResolver {
    codec: TokenCodec,
    store: Arc<dyn IdentityStore>,
    mode: RevalidationMode,
    store_timeout: Duration,
}

impl SessionResolver {
    pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_millis(500);

    pub fn new(codec: TokenCodec, store: Arc<dyn IdentityStore>) -> Self {
        Self {
            codec,
            store,
            mode: RevalidationMode::PerRequest,
            store_timeout: Self::DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_mode(mut self, mode: RevalidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Resolve `credentials` as of `now`. Never errors: every failure mode
    /// folds into an anonymous-equivalent session state.
    pub async fn resolve(&self, credentials: &RequestCredentials, now: DateTime<Utc>) -> Session {
        let Some(token) = credentials.token() else {
            return Session::Anonymous;
        };

        let principal = match self.codec.verify(token, now) {
            Ok(principal) => principal,
            Err(err) => {
                tracing::debug!(reason = %err, "rejected session credential");
                return Session::Invalid(err);
            }
        };

        match self.mode {
            RevalidationMode::TrustToken => Session::Authenticated(principal),
            RevalidationMode::PerRequest => self.revalidate(principal).await,
        }
    }

    /// Close the token-staleness gap with a live lookup.
    ///
    /// Fail-closed on every store failure: timeout/error degrade to
    /// anonymous, an unknown id degrades to inactive.
    async fn revalidate(&self, mut principal: Principal) -> Session {
        let lookup = tokio::time::timeout(self.store_timeout, self.store.find_by_id(principal.id));

        match lookup.await {
            Err(_elapsed) => {
                tracing::warn!(user_id = %principal.id, "identity store revalidation timed out");
                Session::Anonymous
            }
            Ok(Err(err)) => {
                tracing::warn!(user_id = %principal.id, error = %err, "identity store revalidation failed");
                Session::Anonymous
            }
            Ok(Ok(None)) => {
                tracing::warn!(user_id = %principal.id, "token verified for unknown account");
                principal.status = AccountStatus::Inactive;
                Session::Authenticated(principal)
            }
            Ok(Ok(Some(record))) => {
                principal.display_name = record.display_name;
                principal.role = record.role;
                principal.status = record.status;
                Session::Authenticated(principal)
            }
        }
    }
}
