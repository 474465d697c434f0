//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use tempfile::TempDir;
use tower::util::ServiceExt;

use chatpad::api::{AppState, app};
use chatpad::core::AppConfig;

pub const SYSTEM_MESSAGE: &str = "Output markdown.";

/// A config pointing at a history file inside `dir` and a completion
/// API at `llm_url`.
pub fn test_config(dir: &TempDir, llm_url: &str) -> AppConfig {
    AppConfig {
        history_path: dir.path().join("history.json").display().to_string(),
        static_path: dir.path().join("web-ui").display().to_string(),
        openai_api_hostname: llm_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("deepseek-chat"),
        temperature: 0.7,
        completion_timeout: Duration::from_secs(5),
        system_message: String::from(SYSTEM_MESSAGE),
        strict_roles: true,
    }
}

/// Creates a test application router backed by a fresh temporary
/// history file. Keep the returned `TempDir` alive for the duration
/// of the test.
pub async fn test_app(llm_url: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = test_config(&dir, llm_url);
    (app_with_config(config).await, dir)
}

pub async fn app_with_config(config: AppConfig) -> Router {
    let app_state = AppState::load(config).await;
    app(Arc::new(app_state))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    serde_json::from_str(&body_to_string(body).await).unwrap()
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().uri(uri).method(method);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get_history(app: &Router) -> serde_json::Value {
    let response = send(app, "GET", "/api/history", None).await;
    body_to_json(response.into_body()).await
}
