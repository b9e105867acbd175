use async_trait::async_trait;
use tracing::debug;

use abe_client::{AirbyteClient, DEFAULT_JOB_WINDOW};
use abe_metrics::ScrapeMetrics;
use abe_model::SyncSample;

use crate::error::CollectError;
use crate::handler::{ScrapeHandler, ScrapeOutput};

/// Pulls connection and job state from Airbyte and turns it into gauges.
///
/// Each scrape runs against a registry of its own: token acquisition, the
/// connection listing, and the per-connection job fetches happen
/// sequentially, and any failure along the way drops the registry so
/// nothing partial is ever exposed.
pub struct Collector {
    client: AirbyteClient,
    job_window: usize,
}

impl Collector {
    pub fn new(client: AirbyteClient) -> Self {
        Self {
            client,
            job_window: DEFAULT_JOB_WINDOW,
        }
    }

    pub fn with_job_window(client: AirbyteClient, job_window: usize) -> Self {
        Self { client, job_window }
    }
}

#[async_trait]
impl ScrapeHandler for Collector {
    async fn scrape(&self) -> Result<ScrapeOutput, CollectError> {
        let metrics = ScrapeMetrics::new()?;

        let token = self.client.acquire_token().await?;
        let connections = self.client.list_connections(&token).await?;
        for connection in &connections {
            let jobs = self
                .client
                .recent_jobs(&token, &connection.connection_id, self.job_window)
                .await?;
            let sample = SyncSample::derive(&jobs);
            debug!(
                "connection {}: last sync result {}, last success at {}",
                connection.connection_id, sample.last_sync_result, sample.last_success_epoch
            );
            metrics.record(connection, &sample);
        }

        Ok(ScrapeOutput {
            content_type: metrics.content_type(),
            body: metrics.render()?,
        })
    }
}
