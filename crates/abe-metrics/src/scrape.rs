use abe_model::{Connection, SyncSample};
use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};

const LABELS: &[&str] = &["connection_id", "name", "connection_status"];

/// One request's worth of gauges, backed by a fresh registry.
pub struct ScrapeMetrics {
    registry: Registry,
    last_sync_result: GaugeVec,
    last_success_date: GaugeVec,
    last_sync_duration: GaugeVec,
    bytes_synced: GaugeVec,
    rows_synced: GaugeVec,
}

impl ScrapeMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        Ok(Self {
            last_sync_result: gauge(
                &registry,
                "airbyte_last_sync_result",
                "Last sync result for a connection (1=success, 0=fail)",
            )?,
            last_success_date: gauge(
                &registry,
                "airbyte_last_success_date",
                "Timestamp (in seconds) of the last successful job update for a connection",
            )?,
            last_sync_duration: gauge(
                &registry,
                "airbyte_last_sync_duration",
                "Duration (in seconds) of the last successful sync for a connection",
            )?,
            bytes_synced: gauge(
                &registry,
                "airbyte_last_sync_bytes_synced",
                "Number of bytes synced in the last successful sync for a connection",
            )?,
            rows_synced: gauge(
                &registry,
                "airbyte_last_sync_rows_synced",
                "Number of rows synced in the last successful sync for a connection",
            )?,
            registry,
        })
    }

    /// Set all five gauges for one connection.
    pub fn record(&self, connection: &Connection, sample: &SyncSample) {
        let labels = [
            connection.connection_id.as_str(),
            connection.name.as_str(),
            connection.status.as_str(),
        ];
        self.last_sync_result
            .with_label_values(&labels)
            .set(sample.last_sync_result);
        self.last_success_date
            .with_label_values(&labels)
            .set(sample.last_success_epoch);
        self.last_sync_duration
            .with_label_values(&labels)
            .set(sample.last_sync_duration);
        self.bytes_synced
            .with_label_values(&labels)
            .set(sample.bytes_synced);
        self.rows_synced
            .with_label_values(&labels)
            .set(sample.rows_synced);
    }

    /// Content type of the text exposition format.
    pub fn content_type(&self) -> &'static str {
        prometheus::TEXT_FORMAT
    }

    /// Serialize everything recorded so far into exposition text.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

fn gauge(registry: &Registry, name: &str, help: &str) -> Result<GaugeVec, prometheus::Error> {
    let gauge = GaugeVec::new(Opts::new(name, help), LABELS)?;
    registry.register(Box::new(gauge.clone()))?;
    Ok(gauge)
}
