//! Environment-driven configuration.
//!
//! Bad configuration is fatal at startup; nothing here is handled
//! per-request.

use std::time::Duration;

use anyhow::Context;

/// Runtime configuration of the gate.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Secret for signing/verifying session tokens.
    pub session_secret: String,

    /// Session token time-to-live.
    pub token_ttl: chrono::Duration,

    /// Re-check role/status against the identity store per request.
    /// Disabling trades staleness (a deactivated account keeps working
    /// until token expiry) for latency.
    pub revalidate: bool,

    /// Budget for a single identity-store lookup; timeouts fail closed.
    pub store_timeout: Duration,

    pub bind_addr: String,
}

impl GateConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let ttl_minutes = env_parse("SESSION_TTL_MINUTES", 24 * 60)?;
        let revalidate = env_parse("REVALIDATE_SESSIONS", true)?;
        let store_timeout_ms: u64 = env_parse("STORE_TIMEOUT_MS", 500)?;

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            session_secret,
            token_ttl: chrono::Duration::minutes(ttl_minutes),
            revalidate,
            store_timeout: Duration::from_millis(store_timeout_ms),
            bind_addr,
        })
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
