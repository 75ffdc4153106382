pub mod analysis;

pub use analysis::{AnalyzeRequest, AnalyzeResponse, PredictResponse, MAX_TEXT_CHARS};
