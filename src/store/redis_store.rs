//! Redis-backed store
//!
//! Speaks the native protocol through the `redis` crate. The connection is
//! opened lazily by the first command and then shared by every request.

use std::sync::Arc;
use std::time::Duration;

use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::{AsyncCommands, Client, RedisResult};
use tokio::sync::OnceCell;
use tracing::info;

use super::{KvStore, StoreError};

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        StoreError::Backend(err.to_string())
    }
}

/// Handle to a Redis server, cheap to share across handlers.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
    /// Multiplexed, auto-reconnecting connection, set on first successful connect
    conn: Arc<OnceCell<ConnectionManager>>,
}

impl RedisStore {
    /// Creates a store for the given URL (e.g. `redis://127.0.0.1:6379/0`).
    ///
    /// Only the URL is validated here; no network I/O happens until the
    /// first command.
    pub fn open(url: &str) -> RedisResult<Self> {
        let client = Client::open(url)?;
        Ok(Self {
            client,
            conn: Arc::new(OnceCell::new()),
        })
    }

    /// Returns the shared connection, connecting if this is the first use.
    ///
    /// Each call makes at most one connect attempt. A failure is returned to
    /// the caller and leaves the cell empty, so a later request tries again.
    async fn connection(&self) -> RedisResult<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let config = ConnectionManagerConfig::new().set_number_of_retries(0);
                let conn =
                    ConnectionManager::new_with_config(self.client.clone(), config).await?;
                info!("Connected to redis at {:?}", self.client.get_connection_info().addr);
                Ok::<_, redis::RedisError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("addr", &self.client.get_connection_info().addr)
            .field("connected", &self.conn.initialized())
            .finish()
    }
}

impl KvStore for RedisStore {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        let mut conn = self.connection().await?;
        // EX takes whole seconds and rejects zero
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        let mut conn = self.connection().await?;
        // Nil reply is the not-found signal
        let value: Option<String> = conn.get(key).await?;
        value.ok_or(StoreError::NotFound)
    }
}
