use async_trait::async_trait;

use crate::error::CollectError;

/// A rendered scrape, ready to be written out as an HTTP response.
#[derive(Debug, Clone)]
pub struct ScrapeOutput {
    pub content_type: &'static str,
    pub body: String,
}

/// Scrape execution seam between the HTTP surface and the collector.
///
/// The HTTP layer only knows how to turn a [`ScrapeOutput`] into a 200 and
/// an error into a 500; everything else lives behind this trait, which also
/// makes the server testable with a stub.
#[async_trait]
pub trait ScrapeHandler: Send + Sync + 'static {
    /// Run one full scrape cycle and render the result.
    async fn scrape(&self) -> Result<ScrapeOutput, CollectError>;
}
