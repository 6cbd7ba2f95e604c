//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the ingested table (`Dataset`, `Column`, `ColumnData`)
//! - model inputs (`Features`, `Split`)
//! - pipeline outputs (`EvaluationScores`)

pub mod types;

pub use types::*;
