//! API Routes
//!
//! Configures the Axum router with the gateway endpoints.

use axum::{
    routing::{any, get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_handler, get_redirect_handler, method_not_allowed_handler, not_found_handler,
    set_handler, AppState,
};
use crate::store::KvStore;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /set` - Store a key-value pair
/// - `GET /get/` - Retrieve a value; any path below `/get/` is accepted too
/// - `/get` - 301 to `/get/`, query string kept
///
/// Wrong methods on these paths (HEAD included) and unknown paths are
/// answered with the JSON envelope instead of an empty body. Every request
/// is traced.
pub fn create_router<S: KvStore>(state: AppState<S>) -> Router {
    // axum serves HEAD from the GET handler unless HEAD has its own route
    let get_route = get(get_handler::<S>)
        .head(method_not_allowed_handler)
        .fallback(method_not_allowed_handler);

    Router::new()
        .route(
            "/set",
            post(set_handler::<S>).fallback(method_not_allowed_handler),
        )
        .route("/get", any(get_redirect_handler))
        .route("/get/", get_route.clone())
        .route("/get/*rest", get_route)
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
