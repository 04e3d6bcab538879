//! Session lifecycle: issue, inspect, end.

use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::{IntoResponse, Response}};
use chrono::Utc;

use membergate_auth::{IdentityStore, SessionClaims, TokenCodec};

use crate::app::dto::{CreateSessionRequest, MeResponse, SessionResponse};
use crate::app::errors::json_message;
use crate::context::CurrentUser;
use crate::cookies;

/// Dependencies of the session routes, built once at startup.
pub struct SessionService {
    pub codec: TokenCodec,
    pub store: Arc<dyn IdentityStore>,
    pub ttl: chrono::Duration,
}

/// `POST /api/session` — bind an upstream-verified identity to a signed
/// session token, returned in the body and as the session cookie.
pub async fn create(
    Extension(service): Extension<Arc<SessionService>>,
    Json(body): Json<CreateSessionRequest>,
) -> Response {
    let record = match service.store.find_by_id(body.user_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::debug!(user_id = %body.user_id, "session requested for unknown account");
            return json_message(StatusCode::UNAUTHORIZED, "unknown account");
        }
        Err(err) => {
            tracing::warn!(user_id = %body.user_id, error = %err, "identity store lookup failed during session issuance");
            return json_message(StatusCode::SERVICE_UNAVAILABLE, "temporarily unavailable");
        }
    };

    let claims = SessionClaims::new(
        record.id,
        record.display_name,
        record.role,
        record.status,
        Utc::now(),
        service.ttl,
    );

    let token = match service.codec.issue(&claims) {
        Ok(token) => token,
        Err(err) => {
            tracing::error!(user_id = %record.id, error = %err, "failed to issue session token");
            return json_message(StatusCode::INTERNAL_SERVER_ERROR, "failed to issue session");
        }
    };

    let expires_at = claims.expires_at();
    let mut response = (
        StatusCode::CREATED,
        Json(SessionResponse {
            token: token.clone(),
            expires_at,
        }),
    )
        .into_response();
    cookies::append_set_cookie(
        response.headers_mut(),
        &cookies::session_cookie(&token, expires_at),
    );
    response
}

/// `POST /api/session/logout` — clear the session cookie. Tokens are not
/// tracked server-side, so there is nothing else to revoke.
pub async fn logout() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    cookies::append_set_cookie(response.headers_mut(), &cookies::clear_session_cookie());
    response
}

/// `GET /api/me` — the principal the gate resolved for this request.
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<MeResponse> {
    Json(MeResponse::from(&user))
}
