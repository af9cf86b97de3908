//! Shared harness for the API integration tests.
//!
//! Builds the real router over in-memory and temp-directory stores, so the
//! tests exercise the same routing table, extractors and error mapping as
//! production without needing Postgres.

use api_lib::adapters::{JsonFileLedger, JsonFilePeriodStore};
use api_lib::config::Config;
use api_lib::web::{self, state::AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use moviepulse_core::memory::MemoryOpinionStore;
use moviepulse_core::sentiment::KeywordSentiment;
use moviepulse_core::service::VotingService;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

/// Configuration for a test instance. Nothing here reaches the network.
fn test_config(data_dir: &std::path::Path) -> Config {
    Config {
        bind_address: "127.0.0.1:0".parse().expect("test bind address"),
        database_url: "postgres://localhost/moviepulse_test".to_string(),
        log_level: tracing::Level::INFO,
        environment: "test".to_string(),
        data_dir: data_dir.to_path_buf(),
        db_connect_attempts: 1,
        db_connect_delay: Duration::from_secs(0),
    }
}

/// The full application router over fresh stores. The `TempDir` must be
/// kept alive for as long as the router is used.
pub fn test_app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = Arc::new(test_config(dir.path()));

    let ledger = Arc::new(JsonFileLedger::new(dir.path()));
    let periods = Arc::new(JsonFilePeriodStore::new(dir.path()));
    let app_state = Arc::new(AppState {
        opinions: Arc::new(MemoryOpinionStore::new()),
        voting: VotingService::new(ledger, periods),
        classifier: Arc::new(KeywordSentiment),
        config,
    });
    (web::router(app_state), dir)
}

/// Sends one request and returns the status plus the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).expect("encode body")))
            .expect("build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("build request"),
    };

    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("parse JSON body")
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send(app, "POST", uri, Some(body)).await
}
