use axum::{
    Router,
    routing::{get, post},
};

pub mod admin;
pub mod members;
pub mod pages;
pub mod session;
pub mod system;

/// All routes, page and API. The gate middleware layered on top decides
/// access; handlers never re-check authentication.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        // Pages.
        .route("/", get(pages::home))
        .route("/login", get(pages::login))
        .route("/logout", get(pages::logout))
        .route("/signup", get(pages::signup))
        .route("/verify", get(pages::verify))
        .route("/legal/terms", get(pages::legal_terms))
        .route("/dashboard", get(pages::dashboard))
        .route("/admin", get(pages::admin_home))
        // Session lifecycle.
        .route("/api/session", post(session::create))
        .route("/api/session/logout", post(session::logout))
        .route("/api/me", get(session::me))
        // Member-facing API.
        .route("/api/members", get(members::list_members))
        .route("/api/contracts", get(members::list_contracts))
        // Back-office API.
        .route("/api/admin/users", get(admin::list_users))
}
