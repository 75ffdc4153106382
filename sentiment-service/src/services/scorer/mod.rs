//! Sentiment scorer abstraction and implementations.
//!
//! Handlers only see `SentimentScorer`, so the VADER backend can be swapped
//! for another library (or a test double) without touching the HTTP layer.

pub mod mock;
pub mod vader;

use crate::models::Polarity;
use thiserror::Error;

pub use vader::VaderScorer;

/// Error type for scorer operations.
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Scorer unavailable: {0}")]
    Unavailable(String),

    #[error("Scoring failed: {0}")]
    Failed(String),
}

/// A synchronous polarity scorer.
pub trait SentimentScorer: Send + Sync {
    /// Short identifier reported by `GET /ready`.
    fn name(&self) -> &str;

    /// Score `text`. Callers guarantee `text` is not blank.
    fn score(&self, text: &str) -> Result<Polarity, ScorerError>;
}
