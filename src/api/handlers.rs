//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Query, RawQuery, State},
    http::{
        header::{CONTENT_TYPE, LOCATION},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Response},
};
use chrono::Local;
use tracing::error;

use crate::error::{GatewayError, Result};
use crate::models::{ApiResponse, SetRequest};
use crate::store::{KvStore, StoreError, ENTRY_TTL};

/// Application state shared across all handlers.
///
/// Holds the single store handle created at startup.
pub struct AppState<S> {
    /// Key-value backend
    pub store: Arc<S>,
}

impl<S> AppState<S> {
    /// Creates a new AppState around the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

/// Handler for POST /set
///
/// Validates content type and payload, then stores the pair with a fixed
/// one-minute expiration.
pub async fn set_handler<S: KvStore>(
    State(state): State<AppState<S>>,
    headers: HeaderMap,
    body: Body,
) -> Result<ApiResponse> {
    let is_json = headers
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes() == b"application/json");
    if !is_json {
        return Err(GatewayError::InvalidContentType);
    }

    let payload = to_bytes(body, usize::MAX)
        .await
        .map_err(|err| GatewayError::InvalidPayload(err.to_string()))?;
    let req =
        SetRequest::from_slice(&payload).map_err(|err| GatewayError::InvalidPayload(err.to_string()))?;

    if !req.is_complete() {
        return Err(GatewayError::MissingKeyOrValue);
    }

    let expires_at = Local::now() + ENTRY_TTL;
    if let Err(err) = state
        .store
        .set_with_expiry(&req.key, &req.value, ENTRY_TTL)
        .await
    {
        error!("Failed to set key [{}]: {}", req.key, err);
        return Err(GatewayError::SetFailed(err.to_string()));
    }

    Ok(ApiResponse::stored(&req.key, &req.value, expires_at))
}

/// Handler for GET /get/
///
/// Only the presence of `key` is checked; an empty key goes to the store.
/// When `key` is repeated the first occurrence wins.
pub async fn get_handler<S: KvStore>(
    State(state): State<AppState<S>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<ApiResponse> {
    let key = params
        .into_iter()
        .find_map(|(name, value)| (name == "key").then_some(value))
        .ok_or(GatewayError::InvalidQuery)?;

    match state.store.get(&key).await {
        Ok(value) => Ok(ApiResponse::retrieved(&key, &value)),
        Err(StoreError::NotFound) => Err(GatewayError::KeyNotFound { key }),
        Err(err) => {
            error!("Failed to get key [{}]: {}", key, err);
            Err(GatewayError::GetFailed {
                key,
                cause: err.to_string(),
            })
        }
    }
}

/// Handler for any method on /get
///
/// Permanently redirects to `/get/`, keeping the query string.
pub async fn get_redirect_handler(RawQuery(query): RawQuery) -> Response {
    let location = match query.filter(|query| !query.is_empty()) {
        Some(query) => format!("/get/?{}", query),
        None => "/get/".to_string(),
    };
    (
        [(LOCATION, location)],
        ApiResponse::new(StatusCode::MOVED_PERMANENTLY, "moved permanently"),
    )
        .into_response()
}

/// Fallback for a bound path hit with the wrong method.
pub async fn method_not_allowed_handler() -> GatewayError {
    GatewayError::InvalidMethod
}

/// Fallback for any path without a route.
pub async fn not_found_handler() -> GatewayError {
    GatewayError::RouteNotFound
}
