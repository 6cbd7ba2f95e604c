use log::{error, info};
use nalgebra::DVector;

use crate::error::AppError;

/// A scalar score derived purely from `(y_true, y_pred)`.
pub trait Evaluation {
    /// Short metric name, used as the tracker key.
    fn name(&self) -> &'static str;

    fn calculate_score(
        &self,
        y_true: &DVector<f64>,
        y_pred: &DVector<f64>,
    ) -> Result<f64, AppError>;
}

/// Mean squared error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mse;

/// Coefficient of determination.
#[derive(Debug, Clone, Copy, Default)]
pub struct R2;

/// Root mean squared error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmse;

impl Evaluation for Mse {
    fn name(&self) -> &'static str {
        "mse"
    }

    fn calculate_score(
        &self,
        y_true: &DVector<f64>,
        y_pred: &DVector<f64>,
    ) -> Result<f64, AppError> {
        info!("Calculating MSE");
        let mse = mean_squared_error(y_true, y_pred)
            .inspect_err(|e| error!("Error in calculating MSE: {e}"))?;
        info!("MSE: {mse}");
        Ok(mse)
    }
}

impl Evaluation for R2 {
    fn name(&self) -> &'static str {
        "r2"
    }

    fn calculate_score(
        &self,
        y_true: &DVector<f64>,
        y_pred: &DVector<f64>,
    ) -> Result<f64, AppError> {
        info!("Calculating R2 score");
        let r2 = r2_score(y_true, y_pred)
            .inspect_err(|e| error!("Error in calculating R2 score: {e}"))?;
        info!("R2 score: {r2}");
        Ok(r2)
    }
}

impl Evaluation for Rmse {
    fn name(&self) -> &'static str {
        "rmse"
    }

    fn calculate_score(
        &self,
        y_true: &DVector<f64>,
        y_pred: &DVector<f64>,
    ) -> Result<f64, AppError> {
        info!("Calculating RMSE");
        let rmse = mean_squared_error(y_true, y_pred)
            .map(f64::sqrt)
            .inspect_err(|e| error!("Error in calculating RMSE: {e}"))?;
        info!("RMSE: {rmse}");
        Ok(rmse)
    }
}

fn check_pair(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<(), AppError> {
    if y_true.is_empty() {
        return Err(AppError::contract("Cannot score an empty prediction set."));
    }
    if y_true.len() != y_pred.len() {
        return Err(AppError::contract(format!(
            "y_true has {} values but y_pred has {}.",
            y_true.len(),
            y_pred.len()
        )));
    }
    Ok(())
}

fn mean_squared_error(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<f64, AppError> {
    check_pair(y_true, y_pred)?;
    Ok((y_true - y_pred).norm_squared() / y_true.len() as f64)
}

/// `1 - SS_res / SS_tot`.
///
/// A constant `y_true` has `SS_tot == 0`; the score is then 1.0 for a perfect
/// prediction and 0.0 otherwise.
fn r2_score(y_true: &DVector<f64>, y_pred: &DVector<f64>) -> Result<f64, AppError> {
    check_pair(y_true, y_pred)?;
    let ss_res = (y_true - y_pred).norm_squared();
    let ss_tot = y_true.add_scalar(-y_true.mean()).norm_squared();
    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(values: &[f64]) -> DVector<f64> {
        DVector::from_row_slice(values)
    }

    #[test]
    fn perfect_prediction_scores() {
        let y = v(&[1.0, 4.0, 2.5, 3.0]);
        assert_eq!(Mse.calculate_score(&y, &y).unwrap(), 0.0);
        assert_eq!(Rmse.calculate_score(&y, &y).unwrap(), 0.0);
        assert_eq!(R2.calculate_score(&y, &y).unwrap(), 1.0);
    }

    #[test]
    fn known_values() {
        let y_true = v(&[3.0, -0.5, 2.0, 7.0]);
        let y_pred = v(&[2.5, 0.0, 2.0, 8.0]);

        let mse = Mse.calculate_score(&y_true, &y_pred).unwrap();
        assert!((mse - 0.375).abs() < 1e-12);

        let rmse = Rmse.calculate_score(&y_true, &y_pred).unwrap();
        assert!((rmse - 0.375_f64.sqrt()).abs() < 1e-12);

        let r2 = R2.calculate_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 0.948_608_137_044_967_9).abs() < 1e-12);
    }

    #[test]
    fn constant_truth_r2() {
        let y = v(&[2.0, 2.0]);
        assert_eq!(R2.calculate_score(&y, &y).unwrap(), 1.0);
        assert_eq!(R2.calculate_score(&y, &v(&[2.0, 3.0])).unwrap(), 0.0);
    }

    #[test]
    fn length_mismatch_is_a_contract_error() {
        let err = Mse.calculate_score(&v(&[1.0, 2.0]), &v(&[1.0])).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Contract);
        assert!(R2.calculate_score(&v(&[]), &v(&[])).is_err());
    }
}
