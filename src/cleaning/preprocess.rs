//! Preprocessing strategy: column pruning and imputation.
//!
//! Order matters; each stage assumes the previous ones ran:
//! 1. drop timestamp columns (absent ones are ignored)
//! 2. median-impute the product dimension columns
//! 3. fill missing review text with a sentinel
//! 4. keep numeric columns only
//! 5. drop identifier columns
//!
//! Output invariant: numeric columns only, no missing cells, row count unchanged.
//! Gaps in the label column are never imputed; they fail the step instead.

use log::{error, info, warn};

use crate::cleaning::division::LABEL_COLUMN;
use crate::cleaning::strategy::DataStrategy;
use crate::domain::{Column, ColumnData, Dataset};
use crate::error::AppError;

pub const TIMESTAMP_COLUMNS: [&str; 5] = [
    "order_approved_at",
    "order_delivered_carrier_date",
    "order_delivered_customer_date",
    "order_estimated_delivery_date",
    "order_purchase_timestamp",
];

pub const MEDIAN_IMPUTED_COLUMNS: [&str; 4] = [
    "product_weight_g",
    "product_length_cm",
    "product_height_cm",
    "product_width_cm",
];

pub const REVIEW_TEXT_COLUMN: &str = "review_comment_message";
pub const REVIEW_TEXT_SENTINEL: &str = "No review";

pub const IDENTIFIER_COLUMNS: [&str; 2] = ["customer_zip_code_prefix", "order_item_id"];

#[derive(Debug, Clone, Copy, Default)]
pub struct DataPreprocessStrategy;

impl DataStrategy for DataPreprocessStrategy {
    type Output = Dataset;

    fn handle_data(&self, data: &Dataset) -> Result<Dataset, AppError> {
        info!("Preprocessing data.");
        preprocess(data.clone()).inspect_err(|e| error!("Error in preprocessing data: {e}"))
    }
}

fn preprocess(mut data: Dataset) -> Result<Dataset, AppError> {
    let rows = data.n_rows();

    for name in TIMESTAMP_COLUMNS {
        data.drop_column(name);
    }

    for name in MEDIAN_IMPUTED_COLUMNS {
        if let Some(column) = data.column_mut(name) {
            fill_median(column)?;
        }
    }

    if let Some(column) = data.column_mut(REVIEW_TEXT_COLUMN) {
        fill_text(column, REVIEW_TEXT_SENTINEL);
    }

    data.retain_columns(|c| c.data.is_numeric());

    for name in IDENTIFIER_COLUMNS {
        data.drop_column(name);
    }

    if let Some(label) = data.column(LABEL_COLUMN) {
        let missing = label.data.missing_count();
        if missing > 0 {
            return Err(AppError::data(format!(
                "Label column '{LABEL_COLUMN}' has {missing} missing values."
            )));
        }
    }

    // Anything still missing would break the fit downstream.
    data.retain_columns(|c| {
        let empty = c.data.missing_count() == c.data.len() && !c.data.is_empty();
        if empty {
            warn!("Dropping column '{}': no values to impute from.", c.name);
        }
        !empty
    });
    let leftover: Vec<String> = data
        .columns()
        .iter()
        .filter(|c| c.data.missing_count() > 0)
        .map(|c| c.name.clone())
        .collect();
    for name in leftover {
        if let Some(column) = data.column_mut(&name) {
            warn!(
                "Column '{name}' has {} missing values; filling with median.",
                column.data.missing_count()
            );
            fill_median(column)?;
        }
    }

    debug_assert_eq!(data.n_rows(), rows);
    Ok(data)
}

/// Median of the present values; even counts average the two middle values.
pub fn median(values: &[Option<f64>]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(f64::total_cmp);
    let mid = present.len() / 2;
    if present.len() % 2 == 0 {
        Some((present[mid - 1] + present[mid]) / 2.0)
    } else {
        Some(present[mid])
    }
}

fn fill_median(column: &mut Column) -> Result<(), AppError> {
    let ColumnData::Numeric(values) = &mut column.data else {
        return Err(AppError::contract(format!(
            "Cannot compute median of non-numeric column '{}'.",
            column.name
        )));
    };
    // An all-missing column has no median; leave it for the type filter.
    let Some(fill) = median(values) else {
        return Ok(());
    };
    for cell in values.iter_mut().filter(|c| c.is_none()) {
        *cell = Some(fill);
    }
    Ok(())
}

fn fill_text(column: &mut Column, sentinel: &str) {
    let filled: Vec<Option<String>> = match &column.data {
        ColumnData::Text(values) => values
            .iter()
            .map(|v| Some(v.clone().unwrap_or_else(|| sentinel.to_string())))
            .collect(),
        ColumnData::Numeric(values) => {
            // Filling numbers with text turns the column into text.
            if values.iter().all(Option::is_some) {
                return;
            }
            values
                .iter()
                .map(|v| Some(v.map_or_else(|| sentinel.to_string(), |x| x.to_string())))
                .collect()
        }
    };
    column.data = ColumnData::Text(filled);
}
