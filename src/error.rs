//! Error types for the gateway
//!
//! Every failure a client can observe is one variant here. The `Display`
//! text of a variant is exactly the `message` of the JSON envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ApiResponse;

// == Gateway Error Enum ==
/// Client-visible failure of a gateway request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Route exists but not for this HTTP method
    #[error("invalid method")]
    InvalidMethod,

    /// `/set` called without `Content-Type: application/json`
    #[error("invalid content-type")]
    InvalidContentType,

    /// Request body is not a valid set payload
    #[error("failed to parse payload, cause: {0}")]
    InvalidPayload(String),

    /// Key or value decoded as an empty string
    #[error("key and value is required.")]
    MissingKeyOrValue,

    /// Store rejected or failed the write
    #[error("failed to set key-value, cause: {0}")]
    SetFailed(String),

    /// `/get/` called without a `key` query parameter
    #[error("invalid query")]
    InvalidQuery,

    /// Key absent or already expired
    #[error("there is no stored value of key [{key}], cause: key is incorrect or value has expired")]
    KeyNotFound { key: String },

    /// Store failed the read
    #[error("failed to get stored value of key [{key}], cause: {cause}")]
    GetFailed { key: String, cause: String },

    /// No route for the requested path
    #[error("not found")]
    RouteNotFound,
}

impl GatewayError {
    /// HTTP status mirrored in the envelope's `code`.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::InvalidContentType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::InvalidPayload(_)
            | GatewayError::MissingKeyOrValue
            | GatewayError::InvalidQuery
            | GatewayError::KeyNotFound { .. } => StatusCode::BAD_REQUEST,
            GatewayError::SetFailed(_) | GatewayError::GetFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        ApiResponse::new(self.status(), self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway handlers.
pub type Result<T> = std::result::Result<T, GatewayError>;
