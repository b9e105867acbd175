use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, info};

use abe_collector::ScrapeHandler;

/// HTTP surface of the exporter.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ScrapeHandler,
{
    /// Create new HTTP API with the given scrape handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - GET /metrics - Run a scrape and return exposition text
    /// - anything else - 404
    pub fn router(self) -> Router {
        Router::new()
            .route("/metrics", get(scrape_metrics::<H>).fallback(not_found))
            .fallback(not_found)
            .with_state(self.handler)
    }
}

/// GET /metrics
async fn scrape_metrics<H>(State(handler): State<Arc<H>>) -> Response
where
    H: ScrapeHandler,
{
    info!("metrics endpoint hit");
    match handler.scrape().await {
        Ok(output) => {
            info!("returning metrics");
            ([(header::CONTENT_TYPE, output.content_type)], output.body).into_response()
        }
        Err(e) => {
            error!("scrape failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error\n").into_response()
        }
    }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found\n").into_response()
}
