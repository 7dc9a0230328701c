//! Property-Based Tests for the API
//!
//! Drives the router with generated keys and values against a MemoryStore.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use proptest::prelude::*;
use tower::util::ServiceExt;

use crate::api::{create_router, AppState};
use crate::models::ApiResponse;
use crate::store::MemoryStore;

// == Strategies ==
/// Non-empty keys that survive a query string without escaping
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_\\-]{1,64}"
}

/// Non-empty values, including characters that need JSON escaping
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 \"\\\\/]{1,128}"
}

// == Helpers ==
async fn send(app: &Router, request: Request<Body>) -> ApiResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let envelope: ApiResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(envelope.code, status.as_u16());
    envelope
}

fn set_request(key: &str, value: &str) -> Request<Body> {
    let body = serde_json::json!({ "key": key, "value": value }).to_string();
    Request::builder()
        .method("POST")
        .uri("/set")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get_request(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/get/?key={}", key))
        .body(Body::empty())
        .unwrap()
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // *For any* non-empty key and value, a set followed by a get returns the value.
    #[test]
    fn prop_set_then_get_round_trip(key in key_strategy(), value in value_strategy()) {
        let rt = runtime();
        let (set, get) = rt.block_on(async {
            let app = create_router(AppState::new(MemoryStore::new()));
            let set = send(&app, set_request(&key, &value)).await;
            let get = send(&app, get_request(&key)).await;
            (set, get)
        });

        prop_assert_eq!(set.code, StatusCode::OK.as_u16());
        prop_assert_eq!(get.code, StatusCode::OK.as_u16());
        prop_assert_eq!(get.message, format!("stored value of key [{}] is [{}]", key, value));
    }

    // *For any* two distinct keys, writing one never changes the other.
    #[test]
    fn prop_disjoint_keys_isolated(
        a in key_strategy(),
        b in key_strategy(),
        va in value_strategy(),
        vb in value_strategy(),
    ) {
        prop_assume!(a != b);
        let rt = runtime();
        let (got_a, got_b) = rt.block_on(async {
            let app = create_router(AppState::new(MemoryStore::new()));
            send(&app, set_request(&a, &va)).await;
            send(&app, set_request(&b, &vb)).await;
            (send(&app, get_request(&a)).await, send(&app, get_request(&b)).await)
        });

        prop_assert_eq!(got_a.message, format!("stored value of key [{}] is [{}]", a, va));
        prop_assert_eq!(got_b.message, format!("stored value of key [{}] is [{}]", b, vb));
    }
}
