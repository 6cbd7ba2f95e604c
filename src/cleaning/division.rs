//! Division strategy: seeded train/test split.
//!
//! The split mirrors the usual shuffle-split convention:
//! `n_test = ceil(test_size * n)`, `n_train = n - n_test`, with rows assigned by
//! shuffling the row indices with a fixed seed. Same input + same seed always
//! yields the same partition.

use log::{debug, error};
use nalgebra::{DMatrix, DVector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::cleaning::strategy::DataStrategy;
use crate::domain::{ColumnData, Dataset, Features, Split};
use crate::error::AppError;

pub const LABEL_COLUMN: &str = "review_score";
pub const DEFAULT_TEST_SIZE: f64 = 0.2;
pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone)]
pub struct DataDivisionStrategy {
    pub label: String,
    pub test_size: f64,
    pub seed: u64,
}

impl Default for DataDivisionStrategy {
    fn default() -> Self {
        Self {
            label: LABEL_COLUMN.to_string(),
            test_size: DEFAULT_TEST_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

impl DataStrategy for DataDivisionStrategy {
    type Output = Split;

    fn handle_data(&self, data: &Dataset) -> Result<Split, AppError> {
        self.divide(data).inspect_err(|e| error!("Error in train-test split: {e}"))
    }
}

impl DataDivisionStrategy {
    fn divide(&self, data: &Dataset) -> Result<Split, AppError> {
        if !data.has_column(&self.label) {
            return Err(AppError::missing_column(&self.label));
        }
        if !(self.test_size > 0.0 && self.test_size < 1.0) {
            return Err(AppError::config(format!(
                "test_size must be in (0, 1), got {}.",
                self.test_size
            )));
        }

        let (features, labels) = self.separate(data)?;

        let n = labels.len();
        let n_test = (self.test_size * n as f64).ceil() as usize;
        let n_train = n.saturating_sub(n_test);
        if n_train == 0 || n_test == 0 {
            return Err(AppError::config(format!(
                "With n_samples={n} and test_size={}, one side of the split would be empty.",
                self.test_size
            )));
        }

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);
        let (test_idx, train_idx) = indices.split_at(n_test);

        debug!(
            "Split {n} rows into {n_train} train / {n_test} test (seed={})",
            self.seed
        );

        Ok(Split {
            x_train: features.select_rows(train_idx),
            x_test: features.select_rows(test_idx),
            y_train: DVector::from_iterator(
                train_idx.len(),
                train_idx.iter().map(|&i| labels[i]),
            ),
            y_test: DVector::from_iterator(test_idx.len(), test_idx.iter().map(|&i| labels[i])),
        })
    }

    /// Split the dataset into a dense feature table and the label vector.
    ///
    /// Expects a cleaned dataset: numeric columns only, no missing cells.
    fn separate(&self, data: &Dataset) -> Result<(Features, DVector<f64>), AppError> {
        let n = data.n_rows();
        let mut names: Vec<String> = Vec::with_capacity(data.n_cols().saturating_sub(1));
        let mut feature_values: Vec<&[Option<f64>]> = Vec::with_capacity(names.capacity());
        let mut label_values: Option<&[Option<f64>]> = None;

        for column in data.columns() {
            let ColumnData::Numeric(values) = &column.data else {
                return Err(AppError::contract(format!(
                    "Expected a cleaned dataset, but column '{}' is not numeric.",
                    column.name
                )));
            };
            if column.data.missing_count() > 0 {
                return Err(AppError::contract(format!(
                    "Expected a cleaned dataset, but column '{}' has missing values.",
                    column.name
                )));
            }
            if column.name == self.label {
                label_values = Some(values.as_slice());
            } else {
                names.push(column.name.clone());
                feature_values.push(values.as_slice());
            }
        }

        let label_values = label_values.ok_or_else(|| AppError::missing_column(&self.label))?;
        let labels =
            DVector::from_iterator(n, label_values.iter().map(|v| v.unwrap_or(f64::NAN)));
        let values = DMatrix::from_fn(n, feature_values.len(), |i, j| {
            feature_values[j][i].unwrap_or(f64::NAN)
        });

        Ok((Features { names, values }, labels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;
    use crate::error::ErrorKind;

    fn dataset(n: usize) -> Dataset {
        Dataset::new(vec![
            Column::numeric("review_score", (0..n).map(|i| Some(i as f64)).collect()),
            Column::numeric("product_weight_g", (0..n).map(|i| Some(100.0 + i as f64)).collect()),
        ])
        .unwrap()
    }

    #[test]
    fn ten_rows_split_eight_two() {
        let split = DataDivisionStrategy::default().handle_data(&dataset(10)).unwrap();
        assert_eq!(split.x_train.n_rows(), 8);
        assert_eq!(split.y_train.len(), 8);
        assert_eq!(split.x_test.n_rows(), 2);
        assert_eq!(split.y_test.len(), 2);
        assert_eq!(split.x_train.names, vec!["product_weight_g".to_string()]);
    }

    #[test]
    fn partition_covers_every_row_once() {
        for n in [2, 3, 7, 50, 101] {
            let split = DataDivisionStrategy::default().handle_data(&dataset(n)).unwrap();
            assert_eq!(split.x_train.n_rows() + split.x_test.n_rows(), n);
            assert_eq!(split.x_train.n_rows(), split.y_train.len());
            assert_eq!(split.x_test.n_rows(), split.y_test.len());

            let mut seen: Vec<f64> = split
                .y_train
                .iter()
                .chain(split.y_test.iter())
                .copied()
                .collect();
            seen.sort_by(f64::total_cmp);
            let expected: Vec<f64> = (0..n).map(|i| i as f64).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn features_stay_aligned_with_labels() {
        let split = DataDivisionStrategy::default().handle_data(&dataset(20)).unwrap();
        for (i, y) in split.y_train.iter().enumerate() {
            assert_eq!(split.x_train.values[(i, 0)], 100.0 + y);
        }
    }

    #[test]
    fn same_seed_same_split() {
        let ds = dataset(30);
        let a = DataDivisionStrategy::default().handle_data(&ds).unwrap();
        let b = DataDivisionStrategy::default().handle_data(&ds).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn missing_label_is_fatal() {
        let weight = Column::numeric("product_weight_g", vec![Some(1.0), Some(2.0)]);
        let ds = Dataset::new(vec![weight]).unwrap();
        let err = DataDivisionStrategy::default().handle_data(&ds).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingColumn);
    }

    #[test]
    fn uncleaned_dataset_violates_contract() {
        let ds = Dataset::new(vec![
            Column::numeric("review_score", vec![Some(1.0), Some(2.0)]),
            Column::text("customer_city", vec![Some("a".into()), Some("b".into())]),
        ])
        .unwrap();
        let err = DataDivisionStrategy::default().handle_data(&ds).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Contract);
    }

    #[test]
    fn single_row_cannot_be_split() {
        let err = DataDivisionStrategy::default().handle_data(&dataset(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
