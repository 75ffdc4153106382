//! Scorer doubles for testing.

use super::{ScorerError, SentimentScorer};
use crate::models::Polarity;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Returns the same polarity for every input and counts invocations.
#[derive(Debug, Default)]
pub struct FixedScorer {
    polarity: f64,
    calls: AtomicUsize,
}

impl FixedScorer {
    pub fn new(polarity: f64) -> Self {
        Self {
            polarity,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SentimentScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score(&self, _text: &str) -> Result<Polarity, ScorerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Polarity {
            polarity: self.polarity,
            subjectivity: 0.5,
        })
    }
}

/// Fails every call.
#[derive(Debug, Default)]
pub struct FailingScorer;

impl SentimentScorer for FailingScorer {
    fn name(&self) -> &str {
        "failing"
    }

    fn score(&self, _text: &str) -> Result<Polarity, ScorerError> {
        Err(ScorerError::Unavailable("scorer is down".to_string()))
    }
}
