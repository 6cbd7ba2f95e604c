use log::{error, info};
use nalgebra::DVector;

use crate::config::{ModelKind, ModelNameConfig};
use crate::domain::Features;
use crate::error::AppError;
use crate::models::{LinearRegressionModel, LinearRegressionParams, LinearRegressor, Model};
use crate::tracking::ExperimentTracker;

/// Fit the configured model on the training split.
///
/// The model name is resolved before anything else, so an unsupported name
/// fails without touching the data.
pub fn train_model(
    x_train: &Features,
    y_train: &DVector<f64>,
    config: &ModelNameConfig,
    params: LinearRegressionParams,
    tracker: Option<&mut dyn ExperimentTracker>,
) -> Result<LinearRegressor, AppError> {
    let kind = config
        .model_kind()
        .inspect_err(|e| error!("Error in training model: {e}"))?;

    let model = match kind {
        ModelKind::LinearRegression => LinearRegressionModel::with_params(params),
    };

    info!(
        "Training {} on {} rows x {} features",
        config.model_name,
        x_train.n_rows(),
        x_train.n_cols()
    );
    let fitted = model
        .train(x_train, y_train)
        .inspect_err(|e| error!("Error in training model: {e}"))?;

    if let Some(t) = tracker {
        t.log_param("model_name", &config.model_name);
        t.log_param("fit_intercept", &params.fit_intercept.to_string());
        t.log_param("n_features", &x_train.n_cols().to_string());
        t.log_param("n_train", &x_train.n_rows().to_string());
    }

    Ok(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::tracking::FileTracker;
    use nalgebra::DMatrix;

    fn training_data() -> (Features, DVector<f64>) {
        let x = Features {
            names: vec!["product_weight_g".to_string()],
            values: DMatrix::from_row_slice(4, 1, &[1.0, 2.0, 3.0, 4.0]),
        };
        (x, DVector::from_row_slice(&[3.0, 5.0, 7.0, 9.0]))
    }

    #[test]
    fn unsupported_model_fails_before_fitting() {
        // Labels deliberately mismatch the features: a fit attempt would fail
        // with a fit error, so a config error proves no fit was attempted.
        let (x, _) = training_data();
        let y = DVector::from_row_slice(&[1.0]);
        let config = ModelNameConfig::new("RandomForest");
        let err = train_model(&x, &y, &config, Default::default(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn label_only_split_is_a_fit_error() {
        let x = Features {
            names: Vec::new(),
            values: DMatrix::zeros(8, 0),
        };
        let y = DVector::from_row_slice(&[5.0, 4.0, 1.0, 3.0, 5.0, 4.0, 5.0, 3.0]);
        let mut tracker = FileTracker::new("file", "unused");
        let config = ModelNameConfig::default();

        let err = train_model(&x, &y, &config, Default::default(), Some(&mut tracker)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fit);
        assert!(tracker.record().params.is_empty());
    }

    #[test]
    fn logs_params_to_tracker() {
        let (x, y) = training_data();
        let mut tracker = FileTracker::new("file", "unused");
        let config = ModelNameConfig::default();
        let model = train_model(&x, &y, &config, Default::default(), Some(&mut tracker)).unwrap();

        assert!((model.coefficients[0] - 2.0).abs() < 1e-9);
        assert!((model.intercept - 1.0).abs() < 1e-9);
        assert_eq!(tracker.record().params["model_name"], "LinearRegression");
        assert_eq!(tracker.record().params["n_train"], "4");
    }
}
