//! Data-cleaning strategies.
//!
//! - `DataStrategy`: the interface every cleaning algorithm implements
//! - `DataCleaning`: binds one dataset to one strategy
//! - `DataPreprocessStrategy`: column pruning + imputation (`preprocess`)
//! - `DataDivisionStrategy`: seeded train/test split (`division`)

pub mod division;
pub mod preprocess;
pub mod strategy;

pub use division::*;
pub use preprocess::*;
pub use strategy::*;
