//! Response DTOs for the gateway API
//!
//! Every request, successful or not, is answered with an [`ApiResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize};

/// JSON envelope `{code, message}`; `code` mirrors the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code
    pub code: u16,
    /// Human readable outcome
    pub message: String,
}

impl ApiResponse {
    /// Creates an envelope for the given status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// Successful `/set` outcome.
    pub fn stored(key: &str, value: &str, expires_at: DateTime<Local>) -> Self {
        Self::new(
            StatusCode::OK,
            format!(
                "key [{}] and value [{}] have been stored and will be expired at {}",
                key,
                value,
                expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
        )
    }

    /// Successful `/get/` outcome.
    pub fn retrieved(key: &str, value: &str) -> Self {
        Self::new(
            StatusCode::OK,
            format!("stored value of key [{}] is [{}]", key, value),
        )
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
