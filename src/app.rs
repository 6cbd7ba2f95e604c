//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments and installs the logger
//! - resolves the experiment tracker from the active stack
//! - runs the training pipeline
//! - prints the summary and writes optional exports

use clap::Parser;
use log::{error, info, warn};

use crate::config::PipelineConfig;
use crate::error::AppError;
use crate::tracking::{ActiveStack, ExperimentTracker, RunStatus};

pub mod pipeline;

/// Entry point for the `run-pipeline` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init();

    let config = cli.pipeline_config();

    let mut tracker = ActiveStack::from_env()
        .experiment_tracker()
        .inspect_err(|e| error!("Error retrieving experiment tracker: {e}"))?;
    match tracker.as_deref() {
        Some(t) => match t.tracking_uri() {
            Some(uri) => info!("Tracking URI: {uri}"),
            None => warn!("Experiment tracker {} does not report a tracking URI", t.name()),
        },
        None => info!("No experiment tracker configured; metrics will not be tracked"),
    }

    info!("Starting training pipeline...");
    let tracker_ref: Option<&mut dyn ExperimentTracker> = match &mut tracker {
        Some(t) => Some(&mut **t),
        None => None,
    };
    let outcome = run_and_export(&config, tracker_ref);

    let status = if outcome.is_ok() {
        RunStatus::Finished
    } else {
        RunStatus::Failed
    };
    if let Some(t) = tracker.as_deref_mut() {
        if let Err(e) = t.finish(status) {
            error!("Failed to close tracked run: {e}");
        }
    }

    match outcome {
        Ok(output) => {
            info!("Training pipeline completed successfully!");
            println!("{}", crate::report::format_run_summary(&output, &config));
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {e}");
            Err(e)
        }
    }
}

fn run_and_export(
    config: &PipelineConfig,
    tracker: Option<&mut dyn ExperimentTracker>,
) -> Result<pipeline::PipelineOutput, AppError> {
    let output = pipeline::training_pipeline(config, tracker)?;

    if let Some(path) = &config.export_model {
        crate::io::write_model_json(path, &config.model.model_name, &output.model)?;
        info!("Model written to {}", path.display());
    }
    if let Some(path) = &config.export_scores {
        crate::io::write_scores_json(path, &output.scores)?;
        info!("Scores written to {}", path.display());
    }

    Ok(output)
}
