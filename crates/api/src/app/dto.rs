//! Request/response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use membergate_core::{AccountStatus, Role, UserId};

use crate::context::CurrentUser;

/// Body of `POST /api/session`.
///
/// Credential verification (password, OAuth exchange) happens upstream of
/// this subsystem; the endpoint binds an already-verified identity to a
/// session.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub user_id: UserId,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Body of `GET /api/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: UserId,
    pub display_name: String,
    pub role: Role,
    pub status: AccountStatus,
    pub session_expiry: DateTime<Utc>,
}

impl From<&CurrentUser> for MeResponse {
    fn from(user: &CurrentUser) -> Self {
        let principal = user.principal();
        Self {
            id: principal.id,
            display_name: principal.display_name.clone(),
            role: principal.role,
            status: principal.status,
            session_expiry: principal.session_expiry,
        }
    }
}
