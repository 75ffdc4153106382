//! Sentiment domain types: raw scorer output and the canonical result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed label set derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Bucket a polarity: strictly above `threshold` is positive, strictly
    /// below `-threshold` is negative, anything else (including the
    /// boundaries themselves) is neutral.
    pub fn from_polarity(polarity: f64, threshold: f64) -> Self {
        if polarity > threshold {
            Sentiment::Positive
        } else if polarity < -threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw scorer output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polarity {
    /// -1.0 (negative) to 1.0 (positive).
    pub polarity: f64,
    /// 0.0 (objective) to 1.0 (subjective). Not part of the response.
    pub subjectivity: f64,
}

impl Polarity {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub score: f64,
}

impl AnalysisResult {
    /// The score is carried through unrounded.
    pub fn from_polarity(raw: Polarity, threshold: f64) -> Self {
        Self {
            sentiment: Sentiment::from_polarity(raw.polarity, threshold),
            score: raw.polarity,
        }
    }
}
