use anyhow::Result;
use nws_weather_mcp::{Weather, WeatherConfig};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nws_weather_mcp=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather server");

    let config = WeatherConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let weather = Weather::new(config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
