pub mod metrics;
pub mod scorer;

pub use metrics::{get_metrics, init_metrics};
pub use scorer::{ScorerError, SentimentScorer, VaderScorer};
