//! "Active stack" resolution: which tracker (if any) this run reports to.
//!
//! Read from the environment after loading `.env`:
//! - `PIPELINE_TRACKER`: tracker name (`file`), unset/empty/`none` for no tracker
//! - `PIPELINE_TRACKING_DIR`: where the file tracker writes runs (default `mlruns`)

use std::path::PathBuf;

use log::debug;

use crate::error::AppError;
use crate::tracking::{ExperimentTracker, FileTracker};

pub const TRACKER_ENV: &str = "PIPELINE_TRACKER";
pub const TRACKING_DIR_ENV: &str = "PIPELINE_TRACKING_DIR";
pub const DEFAULT_TRACKING_DIR: &str = "mlruns";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStack {
    pub tracker: Option<String>,
    pub tracking_dir: PathBuf,
}

impl ActiveStack {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let tracker = std::env::var(TRACKER_ENV).ok();
        let dir = std::env::var(TRACKING_DIR_ENV).ok();
        Self::from_vars(tracker.as_deref(), dir.as_deref())
    }

    pub fn from_vars(tracker: Option<&str>, tracking_dir: Option<&str>) -> Self {
        let tracker = tracker
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"))
            .map(str::to_ascii_lowercase);
        let tracking_dir = tracking_dir
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_TRACKING_DIR);
        Self {
            tracker,
            tracking_dir: PathBuf::from(tracking_dir),
        }
    }

    /// Build the configured tracker. `Ok(None)` means tracking is off.
    pub fn experiment_tracker(&self) -> Result<Option<Box<dyn ExperimentTracker>>, AppError> {
        let Some(name) = self.tracker.as_deref() else {
            debug!("No experiment tracker in the active stack");
            return Ok(None);
        };
        match name {
            "file" => Ok(Some(Box::new(FileTracker::new(name, &self.tracking_dir)))),
            other => Err(AppError::config(format!(
                "Unknown experiment tracker '{other}' (set {TRACKER_ENV}=file or none)."
            ))),
        }
    }
}
