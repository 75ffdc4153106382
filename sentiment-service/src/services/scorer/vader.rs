//! VADER (Valence Aware Dictionary and sEntiment Reasoner) backend.

use super::{ScorerError, SentimentScorer};
use crate::models::Polarity;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Wraps the `vader_sentiment` analyzer. The lexicon is loaded once and
/// shared by every request.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl SentimentScorer for VaderScorer {
    fn name(&self) -> &str {
        "vader"
    }

    /// Polarity is VADER's normalized `compound` score in [-1, 1];
    /// subjectivity is the non-neutral share (`pos + neg`).
    fn score(&self, text: &str) -> Result<Polarity, ScorerError> {
        let scores = self.analyzer.polarity_scores(text);

        let compound = scores
            .get("compound")
            .copied()
            .ok_or_else(|| ScorerError::Failed("VADER returned no compound score".to_string()))?;
        let positive = scores.get("pos").copied().unwrap_or(0.0);
        let negative = scores.get("neg").copied().unwrap_or(0.0);

        Ok(Polarity {
            polarity: compound.clamp(-1.0, 1.0),
            subjectivity: (positive + negative).clamp(0.0, 1.0),
        })
    }
}
