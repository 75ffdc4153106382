//! Sentiment analysis handlers.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use service_core::error::AppError;
use std::time::Instant;

use crate::dtos::{AnalyzeRequest, AnalyzeResponse, PredictResponse};
use crate::models::AnalysisResult;
use crate::services::metrics;
use crate::startup::AppState;

/// Analyze the sentiment of a text.
///
/// POST /analyze
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(req) = payload?;
    let text = req.into_text()?;

    let result = score_text(&state, &text)?;
    Ok(Json(result.into()))
}

/// Legacy prediction endpoint with the confidence/timestamp response shape.
///
/// POST /predict
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let Json(req) = payload?;
    let text = req.into_text()?;

    let result = score_text(&state, &text)?;
    Ok(Json(PredictResponse::new(text, result)))
}

/// Run the scorer and bucket its polarity. The text itself is never logged.
fn score_text(state: &AppState, text: &str) -> Result<AnalysisResult, AppError> {
    let scorer = state.scorer.name();
    tracing::info!(
        text_length = text.chars().count(),
        scorer,
        "Processing sentiment analysis"
    );

    let start = Instant::now();
    let raw = state.scorer.score(text).map_err(|e| {
        metrics::record_scorer_error(scorer);
        tracing::error!(error = %e, scorer, "Sentiment scorer failed");
        AppError::InternalError(anyhow::anyhow!("Sentiment scoring failed: {}", e))
    })?;
    metrics::record_scoring_duration(scorer, start.elapsed().as_secs_f64());

    if !raw.polarity.is_finite() {
        metrics::record_scorer_error(scorer);
        tracing::error!(polarity = raw.polarity, scorer, "Scorer returned a non-finite polarity");
        return Err(AppError::InternalError(anyhow::anyhow!(
            "Scorer returned a non-finite polarity"
        )));
    }

    let result = AnalysisResult::from_polarity(raw, state.config.scoring.neutral_threshold);
    metrics::record_prediction(result.sentiment);

    tracing::info!(
        sentiment = %result.sentiment,
        score = result.score,
        "Sentiment analysis completed"
    );

    Ok(result)
}
