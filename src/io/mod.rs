//! Input/output helpers.
//!
//! - CSV dataset ingest (`dataset`)
//! - JSON exports of the fitted model and scores (`export`)

pub mod dataset;
pub mod export;

pub use dataset::*;
pub use export::*;
