//! HTTP handlers for the sentiment service.

pub mod analyze;
pub mod health;
pub mod index;
pub mod metrics;

pub use analyze::{analyze, predict};
pub use health::{health_check, readiness_check};
pub use index::{index, not_found};
pub use metrics::metrics_endpoint;
