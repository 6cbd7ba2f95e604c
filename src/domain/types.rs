//! Shared domain types.
//!
//! These types are intentionally kept small so every step can pass them by value:
//!
//! - `Dataset`: named, typed columns as read from CSV
//! - `Features` / `Split`: dense numeric tables handed to the model
//! - `EvaluationScores`: the pipeline's final output

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Cell storage for a single column. `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnData::Numeric(_))
    }

    pub fn missing_count(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Text(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    pub fn text(name: impl Into<String>, values: Vec<Option<String>>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }
}

/// Tabular dataset: ordered named columns, rows are samples.
///
/// All columns have the same length; `Dataset::new` enforces that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, AppError> {
        if let Some(first) = columns.first() {
            let n = first.data.len();
            if let Some(bad) = columns.iter().find(|c| c.data.len() != n) {
                return Err(AppError::contract(format!(
                    "Column '{}' has {} rows, expected {n}.",
                    bad.name,
                    bad.data.len()
                )));
            }
        }
        Ok(Self { columns })
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Drop a column if present. Returns whether something was removed.
    pub fn drop_column(&mut self, name: &str) -> bool {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        self.columns.len() != before
    }

    /// Keep only the columns for which `keep` returns true.
    pub fn retain_columns(&mut self, keep: impl FnMut(&Column) -> bool) {
        self.columns.retain(keep);
    }

    /// Total missing cells across all columns.
    pub fn missing_count(&self) -> usize {
        self.columns.iter().map(|c| c.data.missing_count()).sum()
    }
}

/// Dense numeric feature table with column names.
#[derive(Debug, Clone, PartialEq)]
pub struct Features {
    pub names: Vec<String>,
    pub values: DMatrix<f64>,
}

impl Features {
    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    /// Gather a subset of rows (in the given order).
    pub fn select_rows(&self, rows: &[usize]) -> Features {
        let values = DMatrix::from_fn(rows.len(), self.values.ncols(), |i, j| {
            self.values[(rows[i], j)]
        });
        Features {
            names: self.names.clone(),
            values,
        }
    }
}

/// Train/test partition produced by the division strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub x_train: Features,
    pub x_test: Features,
    pub y_train: DVector<f64>,
    pub y_test: DVector<f64>,
}

/// Scores computed by the evaluation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationScores {
    pub mse: f64,
    pub r2: f64,
    pub rmse: f64,
}
