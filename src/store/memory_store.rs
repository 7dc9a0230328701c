//! In-memory store
//!
//! A process-local stand-in for Redis with the same expiry and not-found
//! behaviour, used to exercise the handlers without a server.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

use super::{KvStore, StoreError};

// == Memory Entry ==
/// A stored value with its expiration instant.
#[derive(Debug, Clone)]
struct MemoryEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryEntry {
    fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Expired once the current time reaches the expiration instant.
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// == Memory Store ==
/// HashMap-backed [`KvStore`]. Clones share the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, MemoryEntry>>>,
    /// When set, every operation fails with this cause
    failure: Arc<RwLock<Option<String>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following operation fail with `cause`, like an unreachable server.
    pub async fn fail_with(&self, cause: impl Into<String>) {
        *self.failure.write().await = Some(cause.into());
    }

    /// Clears a failure set by [`MemoryStore::fail_with`].
    pub async fn recover(&self) {
        *self.failure.write().await = None;
    }

    /// Number of entries that have not expired yet.
    pub async fn len(&self) -> usize {
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_expired())
            .count()
    }

    /// Returns true if no live entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn check_failure(&self) -> Result<(), StoreError> {
        match self.failure.read().await.as_ref() {
            Some(cause) => Err(StoreError::Backend(cause.clone())),
            None => Ok(()),
        }
    }
}

impl KvStore for MemoryStore {
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<(), StoreError> {
        self.check_failure().await?;
        let entry = MemoryEntry::new(value.to_string(), ttl);
        self.entries.write().await.insert(key.to_string(), entry);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<String, StoreError> {
        self.check_failure().await?;
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                Err(StoreError::NotFound)
            }
            Some(entry) => Ok(entry.value.clone()),
            None => Err(StoreError::NotFound),
        }
    }
}
