use axum::{http::StatusCode, response::IntoResponse};

use crate::services::get_metrics;

/// Prometheus metrics endpoint.
///
/// GET /metrics
pub async fn metrics_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        get_metrics(),
    )
}
