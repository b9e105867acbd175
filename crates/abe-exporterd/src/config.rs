use std::env;

use anyhow::Context;

pub const DEFAULT_AIRBYTE_URL: &str = "http://localhost:8000";
pub const DEFAULT_CLIENT_ID: &str = "your_client_id";
pub const DEFAULT_CLIENT_SECRET: &str = "your_client_secret";
pub const DEFAULT_PORT: u16 = 3000;

/// Environment-sourced process configuration.
///
/// - `AIRBYTE_URL` - base URL of the Airbyte instance
/// - `CLIENT_ID` / `CLIENT_SECRET` - credentials for the token exchange
/// - `PORT` - listen port for the scrape endpoint
/// - `LOG_LEVEL` / `LOG_FORMAT` - tracing level and output format
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    pub airbyte_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: String,
}

impl ExporterConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            airbyte_url: env_or("AIRBYTE_URL", DEFAULT_AIRBYTE_URL),
            client_id: env_or("CLIENT_ID", DEFAULT_CLIENT_ID),
            client_secret: env_or("CLIENT_SECRET", DEFAULT_CLIENT_SECRET),
            port,
            log_level: env_or("LOG_LEVEL", "info"),
            log_format: env_or("LOG_FORMAT", "text"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
