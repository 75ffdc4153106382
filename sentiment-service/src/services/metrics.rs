//! Prometheus metrics for sentiment-service.
//!
//! HTTP request metrics come from the `metrics` facade (recorded by
//! `service_core::middleware::metrics`) and are rendered through the installed
//! Prometheus recorder. Scoring metrics live in a dedicated registry.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry};
use std::sync::{Mutex, OnceLock};

use crate::models::Sentiment;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();
pub static SENTIMENT_PREDICTIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static SENTIMENT_SCORING_DURATION_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static SENTIMENT_SCORER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

static INIT_LOCK: Mutex<()> = Mutex::new(());

/// Install the Prometheus recorder and register scoring metrics.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_metrics() -> anyhow::Result<()> {
    let _guard = INIT_LOCK
        .lock()
        .map_err(|_| anyhow::anyhow!("metrics init lock poisoned"))?;

    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;

    let registry = Registry::new();

    let predictions = IntCounterVec::new(
        Opts::new(
            "sentiment_predictions_total",
            "Total sentiment predictions by label",
        ),
        &["sentiment"],
    )?;

    let scoring_duration = HistogramVec::new(
        HistogramOpts::new(
            "sentiment_scoring_duration_seconds",
            "Time spent inside the scorer in seconds",
        )
        .buckets(vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["scorer"],
    )?;

    let scorer_errors = IntCounterVec::new(
        Opts::new(
            "sentiment_scorer_errors_total",
            "Total scorer failures by scorer",
        ),
        &["scorer"],
    )?;

    registry.register(Box::new(predictions.clone()))?;
    registry.register(Box::new(scoring_duration.clone()))?;
    registry.register(Box::new(scorer_errors.clone()))?;

    // All cells are empty here: the handle check above runs under the lock.
    let _ = METRICS_HANDLE.set(handle);
    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = SENTIMENT_PREDICTIONS_TOTAL.set(predictions);
    let _ = SENTIMENT_SCORING_DURATION_SECONDS.set(scoring_duration);
    let _ = SENTIMENT_SCORER_ERRORS_TOTAL.set(scorer_errors);

    Ok(())
}

pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let metric_families = registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

pub fn record_prediction(sentiment: Sentiment) {
    if let Some(counter) = SENTIMENT_PREDICTIONS_TOTAL.get() {
        counter.with_label_values(&[sentiment.as_str()]).inc();
    }
}

pub fn record_scoring_duration(scorer: &str, seconds: f64) {
    if let Some(histogram) = SENTIMENT_SCORING_DURATION_SECONDS.get() {
        histogram.with_label_values(&[scorer]).observe(seconds);
    }
}

pub fn record_scorer_error(scorer: &str) {
    if let Some(counter) = SENTIMENT_SCORER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[scorer]).inc();
    }
}
