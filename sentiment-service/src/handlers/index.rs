use axum::{http::Uri, Json};
use serde_json::{json, Value};
use service_core::error::AppError;

/// GET /
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Sentiment Analysis API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/analyze", "/predict", "/health", "/ready", "/metrics"],
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(anyhow::anyhow!("{}", uri.path()))
}
