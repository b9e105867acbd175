use serde::{Deserialize, Serialize};

/// Terminal or in-flight state of a sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Incomplete,
    Failed,
    Succeeded,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl JobStatus {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, JobStatus::Succeeded)
    }
}

/// One execution record (a sync run) belonging to a connection.
///
/// Everything except `status` is optional: the upstream omits duration and
/// byte/row counts for jobs that never ran, and those gaps become zeros
/// downstream rather than errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub status: JobStatus,
    #[serde(default)]
    pub last_updated_at: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub bytes_synced: Option<u64>,
    #[serde(default)]
    pub rows_synced: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_full_job() {
        let json = r#"{
            "status": "succeeded",
            "lastUpdatedAt": "2024-05-01T12:30:00Z",
            "duration": "PT45S",
            "bytesSynced": 1024,
            "rowsSynced": 10
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.status.is_succeeded());
        assert_eq!(job.last_updated_at.as_deref(), Some("2024-05-01T12:30:00Z"));
        assert_eq!(job.duration.as_deref(), Some("PT45S"));
        assert_eq!(job.bytes_synced, Some(1024));
        assert_eq!(job.rows_synced, Some(10));
    }

    #[test]
    fn decode_sparse_job() {
        let json = r#"{"status": "running"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Running);
        assert_eq!(job.last_updated_at, None);
        assert_eq!(job.bytes_synced, None);
    }

    #[test]
    fn unknown_status_is_lenient() {
        let json = r#"{"status": "rebalancing"}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.status, JobStatus::Unknown);
        assert!(!job.status.is_succeeded());
    }
}
