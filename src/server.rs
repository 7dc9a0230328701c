//! Server bootstrap
//!
//! Wires the Redis store into the router and serves it.

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::store::RedisStore;

/// Opens the store, binds `0.0.0.0:<port>` and serves requests.
///
/// Runs until the process is killed. Returns an error if the Redis URL is
/// invalid, the port cannot be bound, or the accept loop fails.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let store = RedisStore::open(&config.redis_url)
        .with_context(|| format!("invalid redis url {}", config.redis_url))?;
    let app = create_router(AppState::new(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
