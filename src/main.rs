//! KV Gateway - HTTP front door for a Redis cache

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kv_gateway::{serve, Config};

/// Main entry point for the gateway.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Open the Redis client (connection is established on first use)
/// 4. Bind the listener and serve until the process is killed
///
/// A startup failure is logged and turns into a non-zero exit status.
#[tokio::main]
async fn main() {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kv_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting KV Gateway");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, redis_url={}",
        config.server_port, config.redis_url
    );

    if let Err(err) = serve(config).await {
        error!("Server failed: {:#}", err);
        std::process::exit(1);
    }
}
