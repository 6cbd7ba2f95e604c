//! Pipeline configuration.
//!
//! `PipelineConfig` is built once by the binary (CLI flags + defaults) and passed
//! down by reference; nothing reads configuration from globals after that.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::LinearRegressionParams;

pub const DEFAULT_DATA_PATH: &str = "data/olist_customers_dataset.csv";
pub const LINEAR_REGRESSION: &str = "LinearRegression";

/// Selects which model variant the train step fits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNameConfig {
    pub model_name: String,
}

impl Default for ModelNameConfig {
    fn default() -> Self {
        Self {
            model_name: LINEAR_REGRESSION.to_string(),
        }
    }
}

/// Supported model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    LinearRegression,
}

impl ModelNameConfig {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
        }
    }

    /// Resolve the configured name. Any unlisted name is a config error.
    pub fn model_kind(&self) -> Result<ModelKind, AppError> {
        match self.model_name.as_str() {
            LINEAR_REGRESSION => Ok(ModelKind::LinearRegression),
            other => Err(AppError::config(format!("Model {other} not listed."))),
        }
    }
}

/// A full run's configuration as understood by the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    pub model: ModelNameConfig,
    pub params: LinearRegressionParams,
    pub export_model: Option<PathBuf>,
    pub export_scores: Option<PathBuf>,
}

impl PipelineConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            model: ModelNameConfig::default(),
            params: LinearRegressionParams::default(),
            export_model: None,
            export_scores: None,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_linear_regression() {
        assert_eq!(
            ModelNameConfig::default().model_kind().unwrap(),
            ModelKind::LinearRegression
        );
    }

    #[test]
    fn unlisted_model_is_rejected() {
        let err = ModelNameConfig::new("RandomForest").model_kind().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Config);
        assert!(err.to_string().contains("RandomForest"));
    }
}
