//! HTTP application wiring (axum router + gate).
//!
//! Layout:
//! - `routes/`: handlers (one file per surface area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router};

use membergate_auth::{IdentityStore, RevalidationMode, SessionResolver, TokenCodec};
use membergate_policy::RoutePolicy;

use crate::config::GateConfig;
use crate::gate::{self, GateState};

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(config: &GateConfig, store: Arc<dyn IdentityStore>) -> Router {
    let codec = TokenCodec::new(config.session_secret.as_bytes());

    let mode = if config.revalidate {
        RevalidationMode::PerRequest
    } else {
        RevalidationMode::TrustToken
    };

    let resolver = Arc::new(
        SessionResolver::new(codec.clone(), store.clone())
            .with_mode(mode)
            .with_store_timeout(config.store_timeout),
    );

    let gate_state = GateState {
        resolver,
        policy: Arc::new(RoutePolicy::standard()),
    };

    let sessions = Arc::new(routes::session::SessionService {
        codec,
        store,
        ttl: config.token_ttl,
    });

    routes::router()
        .layer(Extension(sessions))
        .layer(axum::middleware::from_fn_with_state(
            gate_state,
            gate::gate_middleware,
        ))
}
