use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use lexica_api::config::ServerConfig;
use lexica_api::router::build_app_router;
use lexica_api::state::AppState;
use lexica_dictionary::DictionaryApi;
use lexica_store::HistoryStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The dictionary URL points wherever the
/// test needs it -- usually a local fake upstream.
pub fn test_config(dictionary_api_url: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        dictionary_api_url,
        dictionary_timeout_secs: 5,
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(dictionary_api_url: String) -> Router {
    let config = test_config(dictionary_api_url);

    let state = AppState {
        history: Arc::new(HistoryStore::new()),
        dictionary: Arc::new(DictionaryApi::new(config.dictionary_api_url.clone())),
        config: Arc::new(config.clone()),
    };

    build_app_router(state, &config)
}

/// Build a test app with a dictionary URL that is never contacted.
///
/// Port 9 (discard) guarantees a fast connection failure should a test
/// unexpectedly reach for the upstream.
#[allow(dead_code)]
pub fn build_test_app_without_upstream() -> Router {
    build_test_app("http://127.0.0.1:9/api/v2/entries/en".to_string())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body through the router.
#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request through the router.
#[allow(dead_code)]
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
