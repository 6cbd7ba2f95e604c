use log::{error, info};

use crate::cleaning::{DataCleaning, DataDivisionStrategy, DataPreprocessStrategy};
use crate::domain::{Dataset, Split};
use crate::error::AppError;

/// Preprocess the raw dataset, then divide it into train/test sets.
pub fn clean_data(data: Dataset) -> Result<Split, AppError> {
    info!("Starting data cleaning step.");

    let result = DataCleaning::new(data, DataPreprocessStrategy)
        .handle_data()
        .and_then(|processed| {
            DataCleaning::new(processed, DataDivisionStrategy::default()).handle_data()
        });

    match result {
        Ok(split) => {
            info!(
                "Data cleaning completed successfully: {} train rows, {} test rows, {} features.",
                split.x_train.n_rows(),
                split.x_test.n_rows(),
                split.x_train.n_cols()
            );
            Ok(split)
        }
        Err(e) => {
            error!("Error during cleaning step: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;

    #[test]
    fn ten_row_frame_splits_eight_two() {
        let weight = (0..10)
            .map(|i| if i == 3 || i == 7 { None } else { Some(100.0 + 10.0 * i as f64) })
            .collect();
        let data = Dataset::new(vec![
            Column::numeric("review_score", (0..10).map(|i| Some((i % 5 + 1) as f64)).collect()),
            Column::numeric("product_weight_g", weight),
            Column::text(
                "order_purchase_timestamp",
                (0..10).map(|i| Some(format!("2018-01-{:02}", i + 1))).collect(),
            ),
        ])
        .unwrap();

        let split = clean_data(data).unwrap();
        assert_eq!(split.x_train.n_rows(), 8);
        assert_eq!(split.x_test.n_rows(), 2);
        assert_eq!(split.x_train.names, vec!["product_weight_g".to_string()]);
        assert!(split.x_train.values.iter().all(|v| v.is_finite()));
        assert!(split.x_test.values.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn missing_label_fails_the_step() {
        let price = Column::numeric("price", vec![Some(1.0), Some(2.0)]);
        let data = Dataset::new(vec![price]).unwrap();
        let err = clean_data(data).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::MissingColumn);
    }
}
