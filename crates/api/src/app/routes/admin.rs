//! Back-office API surfaces (admin role required by the route table).

use axum::{Extension, Json};
use serde_json::{Value, json};

use crate::context::CurrentUser;

pub async fn list_users(Extension(user): Extension<CurrentUser>) -> Json<Value> {
    tracing::debug!(user_id = %user.id(), role = %user.role(), "admin user listing");
    Json(json!({
        "requested_by": user.id(),
        "requested_by_role": user.role(),
        "users": [],
    }))
}
