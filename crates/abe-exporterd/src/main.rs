use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

use abe_api::HttpApi;
use abe_client::{AirbyteClient, ClientConfig};
use abe_collector::Collector;
use abe_observe::{Logger, LoggerConfig};

mod config;
use config::ExporterConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ExporterConfig::from_env()?;

    let logger = LoggerConfig {
        format: config.log_format.parse()?,
        level: config.log_level.clone(),
        ..Default::default()
    };
    Logger::init(&logger)?;
    info!("logger initialized");

    let client = AirbyteClient::new(ClientConfig {
        base_url: config.airbyte_url.clone(),
        client_id: config.client_id.clone(),
        client_secret: config.client_secret.clone(),
    });
    let collector = Arc::new(Collector::new(client));
    let router = HttpApi::new(collector).router();
    info!("scraping airbyte at {}", config.airbyte_url);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("shutting down...");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
