use std::sync::Arc;

use anyhow::Context;

use membergate_api::app::build_app;
use membergate_api::config::GateConfig;
use membergate_auth::{AccountRecord, InMemoryIdentityStore};
use membergate_core::{AccountStatus, Role, UserId};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    membergate_observability::init();

    let config = GateConfig::from_env()?;

    // Dev wiring: the production identity store is an external system.
    // Seed one active admin so a fresh process is usable end to end.
    let store = Arc::new(InMemoryIdentityStore::new());
    let admin = AccountRecord {
        id: UserId::new(),
        display_name: "Administrator".to_string(),
        role: Role::Admin,
        status: AccountStatus::Active,
    };
    tracing::info!(user_id = %admin.id, "seeded dev admin account");
    store.insert(admin);

    let app = build_app(&config, store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
