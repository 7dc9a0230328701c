//! Store Module
//!
//! The seam between the HTTP handlers and the key-value backend.
//!
//! Handlers only see [`KvStore`]; production uses [`RedisStore`] and tests
//! substitute [`MemoryStore`].

mod memory_store;
mod redis_store;

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub use self::memory_store::MemoryStore;
pub use self::redis_store::RedisStore;

// == Public Constants ==
/// Lifetime of every stored pair. Not configurable.
pub const ENTRY_TTL: Duration = Duration::from_secs(60);

// == Store Error ==
/// Failure reported by a [`KvStore`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Key absent or expired
    #[error("key not found")]
    NotFound,

    /// Any other backend failure, carrying the backend's error text
    #[error("{0}")]
    Backend(String),
}

// == Store Trait ==
/// Key-value backend shared by all request handlers.
///
/// Implementations must be usable from many requests at once through `&self`.
pub trait KvStore: Send + Sync + 'static {
    /// Stores `value` under `key`, expiring after `ttl`.
    fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Reads the value of `key`; [`StoreError::NotFound`] if absent or expired.
    fn get(&self, key: &str) -> impl Future<Output = Result<String, StoreError>> + Send;
}
