use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::{AnalysisResult, Sentiment};

pub const MAX_TEXT_CHARS: u64 = 10_000;

/// Body of `POST /analyze` and `POST /predict`.
///
/// A missing `text` deserializes to an empty string so it is reported through
/// the same validation path as `""`.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(default)]
    #[validate(length(max = MAX_TEXT_CHARS, message = "Text exceeds the maximum length"))]
    pub text: String,
}

impl AnalyzeRequest {
    /// Validate and hand back the text to score.
    pub fn into_text(self) -> Result<String, AppError> {
        if self.text.trim().is_empty() {
            let mut error = ValidationError::new("required");
            error.message = Some("Text cannot be empty".into());
            let mut errors = ValidationErrors::new();
            errors.add("text", error);
            return Err(errors.into());
        }

        self.validate()?;
        Ok(self.text)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub sentiment: Sentiment,
    pub score: f64,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            sentiment: result.sentiment,
            score: result.score,
        }
    }
}

/// Legacy `/predict` shape: echoes the text and reports `|score|` as a
/// four-decimal confidence.
#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub timestamp: String,
}

impl PredictResponse {
    pub fn new(text: String, result: AnalysisResult) -> Self {
        Self {
            text,
            sentiment: result.sentiment,
            confidence: (result.score.abs() * 10_000.0).round() / 10_000.0,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
