//! Experiment tracking.
//!
//! Steps never look a tracker up themselves; the caller resolves one from the
//! active stack and passes it in as `Option<&mut dyn ExperimentTracker>`.
//! `None` turns every logging call into a no-op.

pub mod file;
pub mod stack;

pub use file::*;
pub use stack::*;

use crate::error::AppError;

/// Terminal state of a tracked run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Running,
    Finished,
    Failed,
}

/// Records params and scalar metrics for one pipeline run.
pub trait ExperimentTracker {
    /// Tracker name as configured in the active stack.
    fn name(&self) -> &str;

    /// Where the run is being recorded, if the tracker has such a notion.
    fn tracking_uri(&self) -> Option<String> {
        None
    }

    fn log_param(&mut self, key: &str, value: &str);

    fn log_metric(&mut self, key: &str, value: f64);

    /// Close the run and flush whatever the tracker buffers.
    fn finish(&mut self, status: RunStatus) -> Result<(), AppError>;
}

/// Reborrow an optional tracker so it can be handed to several steps in turn.
pub fn reborrow<'s>(
    tracker: &'s mut Option<&mut dyn ExperimentTracker>,
) -> Option<&'s mut dyn ExperimentTracker> {
    match tracker {
        Some(t) => Some(&mut **t),
        None => None,
    }
}
