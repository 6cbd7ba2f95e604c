//! File-backed experiment tracker.
//!
//! One JSON document per run, written to `<dir>/<run_id>.json` when the run
//! finishes. Params and metrics are buffered in memory until then, so a run
//! that never reaches `finish` leaves no file behind.

use std::collections::BTreeMap;
use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::tracking::{ExperimentTracker, RunStatus};

/// Serialized form of a tracked run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: String,
    pub tracker: String,
    pub status: RunStatus,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub params: BTreeMap<String, String>,
    pub metrics: BTreeMap<String, f64>,
}

pub struct FileTracker {
    dir: PathBuf,
    record: RunRecord,
}

impl FileTracker {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        let run_id = format!(
            "run_{}_{}",
            Local::now().format("%Y%m%d_%H%M%S"),
            std::process::id()
        );
        Self {
            dir: dir.into(),
            record: RunRecord {
                run_id,
                tracker: name.into(),
                status: RunStatus::Running,
                started_at: Utc::now(),
                ended_at: None,
                params: BTreeMap::new(),
                metrics: BTreeMap::new(),
            },
        }
    }

    pub fn record(&self) -> &RunRecord {
        &self.record
    }

    pub fn run_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.record.run_id))
    }
}

impl ExperimentTracker for FileTracker {
    fn name(&self) -> &str {
        &self.record.tracker
    }

    fn tracking_uri(&self) -> Option<String> {
        let dir = std::path::absolute(&self.dir).unwrap_or_else(|_| self.dir.clone());
        Some(format!("file://{}", dir.display()))
    }

    fn log_param(&mut self, key: &str, value: &str) {
        debug!("tracker[{}] param {key}={value}", self.record.tracker);
        self.record.params.insert(key.to_string(), value.to_string());
    }

    fn log_metric(&mut self, key: &str, value: f64) {
        debug!("tracker[{}] metric {key}={value}", self.record.tracker);
        self.record.metrics.insert(key.to_string(), value);
    }

    fn finish(&mut self, status: RunStatus) -> Result<(), AppError> {
        self.record.status = status;
        self.record.ended_at = Some(Utc::now());

        let path = self.run_path();
        write_run_record(&self.dir, &path, &self.record)?;
        info!("Tracked run written to {}", path.display());
        Ok(())
    }
}

fn write_run_record(dir: &Path, path: &Path, record: &RunRecord) -> Result<(), AppError> {
    create_dir_all(dir).map_err(|e| {
        AppError::io(format!("Failed to create tracking dir '{}': {e}", dir.display()))
    })?;
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create run file '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, record)
        .map_err(|e| AppError::io(format!("Failed to write run file: {e}")))
}

/// Read a run record written by `FileTracker`.
pub fn read_run_record(path: &Path) -> Result<RunRecord, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open run file '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid run file: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffers_until_finish() {
        let dir = tempfile::tempdir().unwrap();
        let runs = dir.path().join("mlruns");
        let mut tracker = FileTracker::new("file", &runs);
        tracker.log_param("model_name", "LinearRegression");
        tracker.log_metric("mse", 0.5);
        tracker.log_metric("mse", 0.25);
        assert!(!tracker.run_path().exists());

        tracker.finish(RunStatus::Finished).unwrap();

        let record = read_run_record(&tracker.run_path()).unwrap();
        assert_eq!(record.status, RunStatus::Finished);
        assert_eq!(record.params["model_name"], "LinearRegression");
        assert_eq!(record.metrics["mse"], 0.25);
        assert!(record.ended_at.is_some());
        assert!(tracker.run_path().starts_with(&runs));
    }

    #[test]
    fn uri_points_at_directory() {
        let tracker = FileTracker::new("file", "mlruns");
        let uri = tracker.tracking_uri().unwrap();
        assert!(uri.starts_with("file://"));
        assert!(uri.ends_with("mlruns"));
    }
}
