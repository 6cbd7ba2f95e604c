//! Ordinary least squares solver.
//!
//! Every fit in this crate reduces to:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! Implementation choices:
//! - SVD solve, so tall, square and rank-deficient design matrices all work
//!   (rank-deficient systems get the minimum-norm solution).
//! - When an intercept is requested, columns are centred first and the
//!   intercept is recovered from the means, which keeps the intercept out of
//!   the minimum-norm penalty.

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

/// Least squares with an optional intercept term.
///
/// Returns `(intercept, coefficients)`; the intercept is `0.0` when
/// `fit_intercept` is false. A design matrix without columns has nothing to
/// fit and yields `None`.
pub fn fit_linear(
    x: &DMatrix<f64>,
    y: &DVector<f64>,
    fit_intercept: bool,
) -> Option<(f64, DVector<f64>)> {
    let n = x.nrows();
    if n == 0 || n != y.len() || x.ncols() == 0 {
        return None;
    }

    if !fit_intercept {
        return solve_least_squares(x, y).map(|beta| (0.0, beta));
    }

    let x_mean = x.row_mean();
    let y_mean = y.mean();
    let mut xc = x.clone();
    for mut row in xc.row_iter_mut() {
        row -= &x_mean;
    }
    let yc = y.add_scalar(-y_mean);

    let beta = solve_least_squares(&xc, &yc)?;
    let intercept = y_mean - (x_mean * &beta)[(0, 0)];
    intercept.is_finite().then_some((intercept, beta))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let beta = solve_least_squares(&x, &y).unwrap();
        assert!((beta[0] - 2.0).abs() < 1e-10);
        assert!((beta[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn centred_fit_recovers_intercept() {
        // y = 1 + 2a - b
        let x = DMatrix::from_row_slice(4, 2, &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 2.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 3.0, 0.0, 2.0]);

        let (intercept, beta) = fit_linear(&x, &y, true).unwrap();
        assert!((intercept - 1.0).abs() < 1e-9);
        assert!((beta[0] - 2.0).abs() < 1e-9);
        assert!((beta[1] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn no_features_has_nothing_to_fit() {
        let x = DMatrix::<f64>::zeros(3, 0);
        let y = DVector::from_row_slice(&[1.0, 2.0, 6.0]);
        assert!(fit_linear(&x, &y, true).is_none());
        assert!(fit_linear(&x, &y, false).is_none());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let x = DMatrix::<f64>::zeros(3, 1);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        assert!(fit_linear(&x, &y, true).is_none());
    }
}
