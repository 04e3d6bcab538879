use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// The one JSON error shape API routes (and the gate) are allowed to emit.
pub fn json_message(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "message": message.into(),
        })),
    )
        .into_response()
}
