//! JSON exports.
//!
//! The model file carries everything needed to predict again (feature names,
//! intercept, coefficients, hyperparameters); the scores file is the evaluate
//! step's output. Both carry the tool name and a creation timestamp.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::EvaluationScores;
use crate::error::AppError;
use crate::models::LinearRegressor;

const TOOL: &str = "score-pipeline";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub created_at: DateTime<Utc>,
    pub model_name: String,
    pub model: LinearRegressor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresFile {
    pub tool: String,
    pub created_at: DateTime<Utc>,
    pub scores: EvaluationScores,
}

/// Write a fitted model to a JSON file.
pub fn write_model_json(
    path: &Path,
    model_name: &str,
    model: &LinearRegressor,
) -> Result<(), AppError> {
    let doc = ModelFile {
        tool: TOOL.to_string(),
        created_at: Utc::now(),
        model_name: model_name.to_string(),
        model: model.clone(),
    };
    write_json(path, &doc, "model")
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<ModelFile, AppError> {
    read_json(path, "model")
}

/// Write evaluation scores to a JSON file.
pub fn write_scores_json(path: &Path, scores: &EvaluationScores) -> Result<(), AppError> {
    let doc = ScoresFile {
        tool: TOOL.to_string(),
        created_at: Utc::now(),
        scores: *scores,
    };
    write_json(path, &doc, "scores")
}

fn write_json<T: Serialize>(path: &Path, value: &T, what: &str) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create {what} JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, value)
        .map_err(|e| AppError::io(format!("Failed to write {what} JSON: {e}")))
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open {what} JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file).map_err(|e| AppError::io(format!("Invalid {what} JSON: {e}")))
}
