use std::path::Path;

use log::{error, info};

use crate::domain::Dataset;
use crate::error::AppError;
use crate::io::read_dataset_csv;

/// Read the raw dataset from a CSV file.
pub fn ingest_data(data_path: &Path) -> Result<Dataset, AppError> {
    info!("Ingesting data from {}", data_path.display());
    let data = read_dataset_csv(data_path)
        .inspect_err(|e| error!("Error while ingesting data: {e}"))?;
    info!("Ingested {} rows x {} columns", data.n_rows(), data.n_cols());
    Ok(data)
}
