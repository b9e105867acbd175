use crate::job::Job;
use crate::{duration, timestamp};

/// Gauge values derived from one connection's recent job window.
///
/// The window is newest-first, so the first succeeded entry in list order
/// is the most recent success the window can see. A success that fell out
/// of the window reports as no success at all (every field `0`); that
/// approximation is intentional.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SyncSample {
    /// `1.0` iff the newest job in the window succeeded.
    pub last_sync_result: f64,
    /// Epoch seconds of the most recent success's `lastUpdatedAt`, else `0`.
    pub last_success_epoch: f64,
    /// Duration in seconds of the most recent success, else `0`.
    pub last_sync_duration: f64,
    /// Bytes moved by the most recent success, else `0`.
    pub bytes_synced: f64,
    /// Rows moved by the most recent success, else `0`.
    pub rows_synced: f64,
}

impl SyncSample {
    pub fn derive(jobs: &[Job]) -> Self {
        let latest_succeeded = jobs.first().is_some_and(|job| job.status.is_succeeded());
        let last_success = jobs.iter().find(|job| job.status.is_succeeded());

        SyncSample {
            last_sync_result: if latest_succeeded { 1.0 } else { 0.0 },
            last_success_epoch: last_success
                .and_then(|job| job.last_updated_at.as_deref())
                .map(timestamp::epoch_seconds)
                .unwrap_or(0) as f64,
            last_sync_duration: last_success
                .and_then(|job| job.duration.as_deref())
                .map(duration::parse_seconds)
                .unwrap_or(0) as f64,
            bytes_synced: last_success.and_then(|job| job.bytes_synced).unwrap_or(0) as f64,
            rows_synced: last_success.and_then(|job| job.rows_synced).unwrap_or(0) as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobStatus;

    fn job(status: JobStatus) -> Job {
        Job {
            status,
            last_updated_at: None,
            duration: None,
            bytes_synced: None,
            rows_synced: None,
        }
    }

    fn succeeded(updated_at: &str, duration: &str, bytes: u64, rows: u64) -> Job {
        Job {
            status: JobStatus::Succeeded,
            last_updated_at: Some(updated_at.to_string()),
            duration: Some(duration.to_string()),
            bytes_synced: Some(bytes),
            rows_synced: Some(rows),
        }
    }

    #[test]
    fn no_jobs_is_all_zero() {
        assert_eq!(SyncSample::derive(&[]), SyncSample::default());
    }

    #[test]
    fn latest_success_fills_everything() {
        let jobs = vec![
            succeeded("2024-05-01T12:30:00Z", "PT1H27M37S", 123_456, 789),
            job(JobStatus::Failed),
        ];
        let sample = SyncSample::derive(&jobs);
        assert_eq!(sample.last_sync_result, 1.0);
        assert_eq!(sample.last_success_epoch, 1_714_566_600.0);
        assert_eq!(sample.last_sync_duration, 5257.0);
        assert_eq!(sample.bytes_synced, 123_456.0);
        assert_eq!(sample.rows_synced, 789.0);
    }

    #[test]
    fn latest_failure_keeps_older_success_fields() {
        let jobs = vec![
            job(JobStatus::Failed),
            job(JobStatus::Cancelled),
            succeeded("2024-04-30T08:00:00Z", "PT45S", 42, 7),
        ];
        let sample = SyncSample::derive(&jobs);
        assert_eq!(sample.last_sync_result, 0.0);
        assert_eq!(sample.last_success_epoch, 1_714_464_000.0);
        assert_eq!(sample.last_sync_duration, 45.0);
        assert_eq!(sample.bytes_synced, 42.0);
        assert_eq!(sample.rows_synced, 7.0);
    }

    #[test]
    fn no_success_in_window_is_all_zero() {
        let jobs = vec![job(JobStatus::Failed), job(JobStatus::Running)];
        let sample = SyncSample::derive(&jobs);
        assert_eq!(sample, SyncSample::default());
    }

    #[test]
    fn sparse_success_defaults_to_zero_fields() {
        let jobs = vec![job(JobStatus::Succeeded)];
        let sample = SyncSample::derive(&jobs);
        assert_eq!(sample.last_sync_result, 1.0);
        assert_eq!(sample.last_success_epoch, 0.0);
        assert_eq!(sample.last_sync_duration, 0.0);
        assert_eq!(sample.bytes_synced, 0.0);
        assert_eq!(sample.rows_synced, 0.0);
    }
}
