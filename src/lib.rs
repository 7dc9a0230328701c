//! KV Gateway - HTTP front door for a Redis cache
//!
//! Exposes `POST /set` and `GET /get/` and stores every pair with a fixed
//! one-minute expiration.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use server::serve;
pub use store::{KvStore, MemoryStore, RedisStore, StoreError, ENTRY_TTL};
