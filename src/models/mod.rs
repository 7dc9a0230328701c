//! Request and Response models for the gateway API
//!
//! This module defines the DTOs used for deserializing request bodies
//! and serializing the response envelope.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetRequest;
pub use responses::ApiResponse;
