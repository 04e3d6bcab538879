//! Session cookie handling (HttpOnly).

use axum::http::{HeaderMap, HeaderValue, header};
use chrono::{DateTime, Utc};
use cookie::{Cookie, SameSite};

/// Name of the session cookie used by page routes.
pub const SESSION_COOKIE: &str = "member_session";

/// Build the session cookie carrying a signed token.
pub fn session_cookie(token: &str, expires_at: DateTime<Utc>) -> Cookie<'static> {
    let expires = cookie::time::OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
        .unwrap_or_else(|_| {
            tracing::warn!(
                timestamp = expires_at.timestamp(),
                "session expiry out of cookie timestamp range; falling back to 24h"
            );
            cookie::time::OffsetDateTime::now_utc() + cookie::time::Duration::hours(24)
        });

    Cookie::build((SESSION_COOKIE, token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .expires(expires)
        .build()
}

/// Build an expired cookie that clears the session cookie client-side.
pub fn clear_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .expires(cookie::time::OffsetDateTime::UNIX_EPOCH)
        .build()
}

/// Extract the session token from the request's `Cookie` header, if any.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    Cookie::split_parse(raw)
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_string())
}

/// Append a `Set-Cookie` header to an arbitrary header map.
pub fn append_set_cookie(headers: &mut HeaderMap, cookie: &Cookie<'_>) {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to encode Set-Cookie header");
        }
    }
}
