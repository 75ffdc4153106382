use sentiment_service::config::SentimentConfig;
use sentiment_service::services::init_metrics;
use sentiment_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = SentimentConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "sentiment-service",
        &config.observability.log_level,
        config.observability.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    tracing::info!("Sentiment service stopped");
    Ok(())
}
