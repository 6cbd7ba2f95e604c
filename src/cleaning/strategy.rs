use crate::domain::Dataset;
use crate::error::AppError;

/// A data operation applied to a whole dataset.
///
/// The output type is strategy-specific: preprocessing yields another
/// `Dataset`, division yields a `Split`.
pub trait DataStrategy {
    type Output;

    fn handle_data(&self, data: &Dataset) -> Result<Self::Output, AppError>;
}

/// Applies one strategy to one dataset.
#[derive(Debug, Clone)]
pub struct DataCleaning<S> {
    data: Dataset,
    strategy: S,
}

impl<S: DataStrategy> DataCleaning<S> {
    pub fn new(data: Dataset, strategy: S) -> Self {
        Self { data, strategy }
    }

    pub fn handle_data(&self) -> Result<S::Output, AppError> {
        self.strategy.handle_data(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;

    struct RowCount;

    impl DataStrategy for RowCount {
        type Output = usize;

        fn handle_data(&self, data: &Dataset) -> Result<usize, AppError> {
            Ok(data.n_rows())
        }
    }

    #[test]
    fn delegates_to_strategy() {
        let ds = Dataset::new(vec![Column::numeric("a", vec![Some(1.0), None])]).unwrap();
        let cleaning = DataCleaning::new(ds, RowCount);
        assert_eq!(cleaning.handle_data().unwrap(), 2);
    }
}
