//! Test harness for driving the HTTP router in-process.
//!
//! Requests go straight through the tower service stack via `oneshot`, so
//! tests exercise routing, extractors, CORS and body limits without binding
//! a socket.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use server_core::server::build_app;
use server_core::Config;
use tower::ServiceExt;

pub struct TestHarness {
    router: Router,
}

impl TestHarness {
    /// Harness with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        // Respect RUST_LOG; try_init so repeated harnesses don't panic.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            router: build_app(&config),
        }
    }

    /// Send a raw request and return the raw response.
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("valid request");

        json_response(self.send(request).await).await
    }

    /// GET a path and decode the JSON response.
    pub async fn get_json(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("valid request");

        json_response(self.send(request).await).await
    }

    /// Shorthand for `POST /analyze {"text": text}`.
    pub async fn analyze(&self, text: &str) -> (StatusCode, Value) {
        self.post_json("/analyze", serde_json::json!({ "text": text }))
            .await
    }
}

async fn json_response(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
