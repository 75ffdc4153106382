use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Polarity must exceed this magnitude to be labelled positive or negative.
pub const DEFAULT_NEUTRAL_THRESHOLD: f64 = 0.0;

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub scoring: ScoringConfig,
    pub http: HttpConfig,
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub neutral_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            common: core_config::Config::default(),
            scoring: ScoringConfig {
                neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
            },
            http: HttpConfig {
                allowed_origins: vec!["*".to_string()],
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
        }
    }
}

impl SentimentConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        let neutral_threshold = parse_threshold(&get_env(
            "SENTIMENT_NEUTRAL_THRESHOLD",
            Some(&DEFAULT_NEUTRAL_THRESHOLD.to_string()),
            is_prod,
        )?)?;

        Ok(SentimentConfig {
            common: common_config,
            scoring: ScoringConfig { neutral_threshold },
            http: HttpConfig {
                allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some("*"),
                    is_prod,
                )?),
            },
            observability: ObservabilityConfig {
                log_level: get_env("LOG_LEVEL", Some("info"), false)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            },
        })
    }
}

fn parse_threshold(raw: &str) -> Result<f64, AppError> {
    let threshold: f64 = raw.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "SENTIMENT_NEUTRAL_THRESHOLD '{}' is not a number: {}",
            raw,
            e
        ))
    })?;

    if !threshold.is_finite() || threshold < 0.0 {
        return Err(AppError::ConfigError(anyhow::anyhow!(
            "SENTIMENT_NEUTRAL_THRESHOLD must be a finite, non-negative number, got {}",
            threshold
        )));
    }

    Ok(threshold)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
