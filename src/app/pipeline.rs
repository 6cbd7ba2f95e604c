//! The training pipeline: `ingest -> clean -> train -> evaluate`.
//!
//! This function only wires steps together. It performs no transformation of
//! its own, and the first failing step aborts the run.

use log::info;

use crate::config::PipelineConfig;
use crate::domain::EvaluationScores;
use crate::error::AppError;
use crate::models::LinearRegressor;
use crate::steps::{clean_data, evaluate_model, ingest_data, train_model};
use crate::tracking::{ExperimentTracker, reborrow};

/// All computed outputs of a single pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub rows: usize,
    pub n_train: usize,
    pub n_test: usize,
    pub model: LinearRegressor,
    pub scores: EvaluationScores,
}

/// Execute the full training pipeline.
pub fn training_pipeline(
    config: &PipelineConfig,
    mut tracker: Option<&mut dyn ExperimentTracker>,
) -> Result<PipelineOutput, AppError> {
    let data = ingest_data(&config.data_path)?;
    let rows = data.n_rows();

    let split = clean_data(data)?;

    let model = train_model(
        &split.x_train,
        &split.y_train,
        &config.model,
        config.params,
        reborrow(&mut tracker),
    )?;

    let scores = evaluate_model(&model, &split.x_test, &split.y_test, reborrow(&mut tracker))?;

    info!("Pipeline finished: {} rows, model {}", rows, config.model.model_name);

    Ok(PipelineOutput {
        rows,
        n_train: split.x_train.n_rows(),
        n_test: split.x_test.n_rows(),
        model,
        scores,
    })
}
