//! Prometheus gauge set for one Airbyte scrape.
//!
//! This crate provides [`ScrapeMetrics`], a registry plus gauge vectors that
//! live for exactly one `/metrics` request. Each request builds its own
//! instance, so concurrent scrapes can never observe each other's values,
//! and a failed scrape leaves nothing partial behind.
//!
//! ## Metrics
//! - `airbyte_last_sync_result{connection_id, name, connection_status}` - Gauge
//! - `airbyte_last_success_date{connection_id, name, connection_status}` - Gauge
//! - `airbyte_last_sync_duration{connection_id, name, connection_status}` - Gauge
//! - `airbyte_last_sync_bytes_synced{connection_id, name, connection_status}` - Gauge
//! - `airbyte_last_sync_rows_synced{connection_id, name, connection_status}` - Gauge

mod scrape;
pub use scrape::ScrapeMetrics;

pub use prometheus::{Encoder, Registry, TextEncoder};
