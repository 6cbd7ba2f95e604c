//! Terminal summary of a pipeline run.
//!
//! Formatting lives here so the steps stay free of presentation concerns.

use crate::app::pipeline::PipelineOutput;
use crate::config::PipelineConfig;

/// Format the run summary (dataset sizes, fitted coefficients, scores).
pub fn format_run_summary(output: &PipelineOutput, config: &PipelineConfig) -> String {
    let mut out = String::new();

    out.push_str("=== score-pipeline - training run ===\n");
    out.push_str(&format!("Data: {}\n", config.data_path.display()));
    out.push_str(&format!(
        "Rows: n={} | train={} | test={}\n",
        output.rows, output.n_train, output.n_test
    ));
    out.push_str(&format!(
        "Model: {} (fit_intercept={})\n",
        config.model.model_name, output.model.params.fit_intercept
    ));

    out.push_str("\nCoefficients:\n");
    out.push_str(&format!("  {:<32} {:>14.6}\n", "(intercept)", output.model.intercept));
    for (name, beta) in output.model.feature_names.iter().zip(&output.model.coefficients) {
        out.push_str(&format!("  {name:<32} {beta:>14.6}\n"));
    }

    out.push_str("\nScores (test split):\n");
    out.push_str(&format!("  MSE  = {:.6}\n", output.scores.mse));
    out.push_str(&format!("  RMSE = {:.6}\n", output.scores.rmse));
    out.push_str(&format!("  R2   = {:.6}\n", output.scores.r2));

    out
}
