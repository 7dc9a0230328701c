//! Configuration Module
//!
//! Loads the gateway configuration from environment variables.

use std::env;

/// Default HTTP listen port.
pub const DEFAULT_PORT: u16 = 8888;

/// Default Redis address: local host, default port, no password, db 0.
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/0";

/// Gateway configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Connection URL of the Redis server
    pub redis_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8888)
    /// - `REDIS_URL` - Redis connection URL (default: redis://127.0.0.1:6379/0)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            redis_url: env::var("REDIS_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            redis_url: DEFAULT_REDIS_URL.to_string(),
        }
    }
}
