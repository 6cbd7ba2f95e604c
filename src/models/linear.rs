//! Linear regression model strategy.
//!
//! `LinearRegressionModel` carries its hyperparameters and passes them through
//! to the least-squares fit unchanged. The fitted `LinearRegressor` remembers
//! the feature names it was trained on so predictions against a differently
//! shaped table fail loudly instead of silently misaligning columns.

use log::{error, info};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::domain::Features;
use crate::error::AppError;
use crate::math::fit_linear;

/// Anything that can produce predictions from a feature table.
pub trait Regressor {
    fn predict(&self, features: &Features) -> Result<DVector<f64>, AppError>;
}

/// A trainable model strategy.
pub trait Model {
    type Fitted: Regressor;

    fn train(&self, features: &Features, labels: &DVector<f64>) -> Result<Self::Fitted, AppError>;
}

/// Hyperparameters for ordinary least squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearRegressionParams {
    /// Fit an intercept term. When false the line passes through the origin.
    pub fit_intercept: bool,
}

impl Default for LinearRegressionParams {
    fn default() -> Self {
        Self { fit_intercept: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinearRegressionModel {
    params: LinearRegressionParams,
}

impl LinearRegressionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: LinearRegressionParams) -> Self {
        Self { params }
    }
}

impl Model for LinearRegressionModel {
    type Fitted = LinearRegressor;

    fn train(
        &self,
        features: &Features,
        labels: &DVector<f64>,
    ) -> Result<LinearRegressor, AppError> {
        fit(features, labels, self.params)
            .inspect_err(|e| error!("Error while training model: {e}"))
    }
}

fn fit(
    features: &Features,
    labels: &DVector<f64>,
    params: LinearRegressionParams,
) -> Result<LinearRegressor, AppError> {
    let n = features.n_rows();
    if n == 0 {
        return Err(AppError::fit("Cannot fit a model on zero rows."));
    }
    if features.n_cols() == 0 {
        return Err(AppError::fit(
            "Cannot fit a model with no feature columns; only the label survived cleaning.",
        ));
    }
    if n != labels.len() {
        return Err(AppError::fit(format!(
            "Feature rows ({n}) and label count ({}) differ.",
            labels.len()
        )));
    }
    if features.names.len() != features.n_cols() {
        return Err(AppError::contract(format!(
            "Feature table has {} names for {} columns.",
            features.names.len(),
            features.n_cols()
        )));
    }
    if !features.values.iter().chain(labels.iter()).all(|v| v.is_finite()) {
        return Err(AppError::fit("Input contains NaN or infinite values."));
    }

    let (intercept, coefficients) = fit_linear(&features.values, labels, params.fit_intercept)
        .ok_or_else(|| AppError::fit("Least-squares system could not be solved."))?;

    info!("Model training completed");

    Ok(LinearRegressor {
        feature_names: features.names.clone(),
        intercept,
        coefficients: coefficients.iter().copied().collect(),
        params,
    })
}

/// Fitted ordinary least squares model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    pub feature_names: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub params: LinearRegressionParams,
}

impl Regressor for LinearRegressor {
    fn predict(&self, features: &Features) -> Result<DVector<f64>, AppError> {
        if features.names != self.feature_names {
            return Err(AppError::contract(format!(
                "Model was trained on features {:?} but received {:?}.",
                self.feature_names, features.names
            )));
        }
        if features.n_cols() != self.coefficients.len() {
            return Err(AppError::contract(format!(
                "Model expects {} feature columns, received {}.",
                self.coefficients.len(),
                features.n_cols()
            )));
        }

        let beta = DVector::from_column_slice(&self.coefficients);
        let y = (&features.values * beta).add_scalar(self.intercept);
        if !y.iter().all(|v| v.is_finite()) {
            return Err(AppError::fit("Non-finite model prediction."));
        }
        Ok(y)
    }
}
