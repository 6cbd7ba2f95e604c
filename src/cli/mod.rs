//! Command-line parsing for the training pipeline runner.
//!
//! Every flag is optional: a bare `run-pipeline` trains on the default dataset
//! path with the default model.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_DATA_PATH, LINEAR_REGRESSION, ModelNameConfig, PipelineConfig};
use crate::models::LinearRegressionParams;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "run-pipeline",
    version,
    about = "Train and evaluate a review-score regression model"
)]
pub struct Cli {
    /// CSV dataset to train on.
    #[arg(long, value_name = "CSV", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Model variant to train.
    #[arg(long, default_value = LINEAR_REGRESSION)]
    pub model_name: String,

    /// Fit the regression through the origin.
    #[arg(long)]
    pub no_intercept: bool,

    /// Export the fitted model (feature names, intercept, coefficients) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_model: Option<PathBuf>,

    /// Export the evaluation scores to JSON.
    #[arg(long, value_name = "JSON")]
    pub export_scores: Option<PathBuf>,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            data_path: self.data.clone(),
            model: ModelNameConfig::new(self.model_name.clone()),
            params: LinearRegressionParams {
                fit_intercept: !self.no_intercept,
            },
            export_model: self.export_model.clone(),
            export_scores: self.export_scores.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_uses_defaults() {
        let cli = Cli::parse_from(["run-pipeline"]);
        let config = cli.pipeline_config();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.model, ModelNameConfig::default());
        assert!(config.params.fit_intercept);
        assert!(config.export_model.is_none());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "run-pipeline",
            "--data",
            "orders.csv",
            "--model-name",
            "RandomForest",
            "--no-intercept",
            "--export-scores",
            "scores.json",
        ]);
        let config = cli.pipeline_config();
        assert_eq!(config.data_path, PathBuf::from("orders.csv"));
        assert_eq!(config.model.model_name, "RandomForest");
        assert!(!config.params.fit_intercept);
        assert_eq!(config.export_scores, Some(PathBuf::from("scores.json")));
    }
}
