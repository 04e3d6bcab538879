//! Member-facing API surfaces.
//!
//! The real member/contract CRUD is thin ORM plumbing out of scope here;
//! these handlers exist as authenticated surfaces for the gate to protect.

use axum::{Extension, Json};
use serde_json::{Value, json};

use crate::context::CurrentUser;

pub async fn list_members(Extension(user): Extension<CurrentUser>) -> Json<Value> {
    tracing::debug!(user_id = %user.id(), "listing members");
    Json(json!({ "members": [], "total": 0 }))
}

pub async fn list_contracts(Extension(user): Extension<CurrentUser>) -> Json<Value> {
    tracing::debug!(user_id = %user.id(), "listing contracts");
    Json(json!({ "contracts": [], "total": 0 }))
}
