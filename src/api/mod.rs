//! API Module
//!
//! HTTP handlers and routing for the gateway.
//!
//! # Endpoints
//! - `POST /set` - Store a key-value pair for one minute
//! - `GET /get/?key=<key>` - Retrieve the value of a key

pub mod handlers;
pub mod routes;

#[cfg(test)]
mod property_tests;

pub use handlers::*;
pub use routes::create_router;
