pub mod sentiment;

pub use sentiment::{AnalysisResult, Polarity, Sentiment};
