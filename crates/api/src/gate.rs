//! Gate adapter: one middleware translating authorization decisions into
//! transport effects.
//!
//! Every inbound request passes through here exactly once:
//! credentials → [`SessionResolver`] → [`RoutePolicy`] → [`decide`] → effect.
//! Page routes degrade to redirects, API routes to structured JSON; a
//! rejected credential additionally clears the client-held session cookie.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use membergate_auth::{Principal, RequestCredentials, Session, SessionResolver};
use membergate_policy::{
    Decision, DenyReason, HOME_PATH, LOGIN_PATH, PrincipalState, RouteKind, RoutePolicy, decide,
};

use crate::app::errors::json_message;
use crate::context::CurrentUser;
use crate::cookies;

/// Trusted identity headers injected for downstream handlers. Any
/// client-supplied values are stripped from every request before the
/// decision is made, whether or not a principal is injected afterwards.
pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_ROLE_HEADER: &str = "x-user-role";

#[derive(Clone)]
pub struct GateState {
    pub resolver: Arc<SessionResolver>,
    pub policy: Arc<RoutePolicy>,
}

pub async fn gate_middleware(
    State(state): State<GateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let original = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    // Identity headers are ours alone: whatever the client sent must not
    // survive the gate, even on routes that allow anonymous access.
    strip_identity_headers(&mut req);

    let credentials = extract_credentials(req.headers());
    let session = state.resolver.resolve(&credentials, Utc::now()).await;

    let principal_state = match session.principal() {
        Some(p) => PrincipalState::of(p.status, p.role),
        None => PrincipalState::Anonymous,
    };

    let kind = RoutePolicy::kind(&path);
    let class = state.policy.classify(&path);
    let decision = decide(principal_state, class);

    let mut response = match decision {
        Decision::Allow => {
            if let Session::Authenticated(principal) = &session {
                inject_identity(&mut req, principal);
            }
            next.run(req).await
        }
        _ => {
            tracing::debug!(
                path = %path,
                reason = %decision.reason().unwrap_or(DenyReason::Unauthenticated),
                "request denied by gate"
            );
            match kind {
                RouteKind::Api => api_denial(decision),
                RouteKind::Page => page_denial(decision, &original),
            }
        }
    };

    // The client holds a token that failed verification; expire it so the
    // browser stops replaying it.
    if session.is_invalid_credential() {
        cookies::append_set_cookie(response.headers_mut(), &cookies::clear_session_cookie());
    }

    response
}

/// Pull credentials out of the request: bearer header or session cookie.
fn extract_credentials(headers: &HeaderMap) -> RequestCredentials {
    RequestCredentials {
        bearer: extract_bearer(headers),
        cookie: cookies::extract_session_token(headers),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

/// Drop any client-supplied identity headers before the request is
/// inspected or forwarded.
fn strip_identity_headers(req: &mut Request<Body>) {
    let headers = req.headers_mut();
    headers.remove(USER_ID_HEADER);
    headers.remove(USER_ROLE_HEADER);
}

/// Make the resolved identity available downstream: request extension for
/// in-process handlers, trusted headers for anything proxied further.
fn inject_identity(req: &mut Request<Body>, principal: &Principal) {
    let headers = req.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&principal.id.to_string()) {
        headers.insert(USER_ID_HEADER, value);
    }
    headers.insert(
        USER_ROLE_HEADER,
        HeaderValue::from_static(principal.role.as_str()),
    );

    req.extensions_mut()
        .insert(CurrentUser::new(principal.clone()));
}

/// API denials: 401 without a valid credential, 403 with one; always the
/// `{ "message": ... }` shape, never internal detail.
fn api_denial(decision: Decision) -> Response {
    let reason = decision.reason().unwrap_or(DenyReason::Unauthenticated);
    let status = match reason {
        DenyReason::Unauthenticated => StatusCode::UNAUTHORIZED,
        _ => StatusCode::FORBIDDEN,
    };
    json_message(status, reason.message())
}

/// Page denials always degrade to a redirect, never an error page.
fn page_denial(decision: Decision, original: &str) -> Response {
    match decision {
        Decision::Allow => unreachable!("allow is handled by the caller"),
        Decision::RedirectToLogin(reason) => {
            let callback = utf8_percent_encode(original, NON_ALPHANUMERIC);
            Redirect::to(&format!(
                "{LOGIN_PATH}?callbackUrl={callback}&reason={}",
                reason.as_str()
            ))
            .into_response()
        }
        Decision::RedirectTo { path, .. } => Redirect::to(path).into_response(),
        // Forbidden pages go to a safe default rather than a 403 page.
        Decision::Deny(_) => Redirect::to(HOME_PATH).into_response(),
    }
}
