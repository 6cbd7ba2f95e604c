use log::{error, info};
use nalgebra::DVector;

use crate::domain::{EvaluationScores, Features};
use crate::error::AppError;
use crate::metrics::{Evaluation, Mse, R2, Rmse};
use crate::models::Regressor;
use crate::tracking::ExperimentTracker;

/// Score a fitted model on the held-out split.
pub fn evaluate_model<M: Regressor>(
    model: &M,
    x_test: &Features,
    y_test: &DVector<f64>,
    tracker: Option<&mut dyn ExperimentTracker>,
) -> Result<EvaluationScores, AppError> {
    info!("Evaluating model on {} samples", x_test.n_rows());

    let scores = score(model, x_test, y_test)
        .inspect_err(|e| error!("Error in evaluating model: {e}"))?;

    if let Some(t) = tracker {
        t.log_metric(Mse.name(), scores.mse);
        t.log_metric(R2.name(), scores.r2);
        t.log_metric(Rmse.name(), scores.rmse);
    }

    info!(
        "Model evaluation completed: mse={:.4} r2={:.4} rmse={:.4}",
        scores.mse, scores.r2, scores.rmse
    );
    Ok(scores)
}

fn score<M: Regressor>(
    model: &M,
    x_test: &Features,
    y_test: &DVector<f64>,
) -> Result<EvaluationScores, AppError> {
    let prediction = model.predict(x_test)?;
    Ok(EvaluationScores {
        mse: Mse.calculate_score(y_test, &prediction)?,
        r2: R2.calculate_score(y_test, &prediction)?,
        rmse: Rmse.calculate_score(y_test, &prediction)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LinearRegressionModel, Model};
    use crate::tracking::FileTracker;
    use nalgebra::DMatrix;

    #[test]
    fn perfect_model_scores_and_logs_metrics() {
        let x = Features {
            names: vec!["a".to_string()],
            values: DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]),
        };
        let y = DVector::from_row_slice(&[2.0, 4.0, 6.0]);
        let model = LinearRegressionModel::new().train(&x, &y).unwrap();

        let mut tracker = FileTracker::new("file", "unused");
        let scores = evaluate_model(&model, &x, &y, Some(&mut tracker)).unwrap();

        assert!(scores.mse.abs() < 1e-12);
        assert!(scores.rmse.abs() < 1e-6);
        assert!((scores.r2 - 1.0).abs() < 1e-12);

        let metrics = &tracker.record().metrics;
        assert!(metrics.contains_key("mse"));
        assert!(metrics.contains_key("r2"));
        assert!(metrics.contains_key("rmse"));
    }
}
