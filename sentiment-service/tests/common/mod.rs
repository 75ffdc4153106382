#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use sentiment_service::config::SentimentConfig;
use sentiment_service::services::SentimentScorer;
use sentiment_service::startup::{build_router, AppState, Application};
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub http_address: String,
    pub port: u16,
}

impl TestApp {
    /// Spawn the real server on a random local port.
    pub async fn spawn() -> Self {
        Self::spawn_with(None).await
    }

    pub async fn spawn_with(scorer: Option<Arc<dyn SentimentScorer>>) -> Self {
        let mut config = test_config();
        config.common.host = [127, 0, 0, 1].into();
        config.common.port = 0;

        let app = match scorer {
            Some(scorer) => Application::build_with_scorer(config, scorer).await,
            None => Application::build(config).await,
        }
        .expect("Failed to build application");

        let port = app.port();
        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            http_address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}

pub fn test_config() -> SentimentConfig {
    SentimentConfig::default()
}

/// Router backed by `scorer`, for in-process `oneshot` requests.
pub fn router_with(scorer: Arc<dyn SentimentScorer>) -> Router {
    build_router(AppState::new(test_config(), scorer))
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Failed to parse JSON")
}
