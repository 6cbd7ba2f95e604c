//! Pipeline steps.
//!
//! Each step is a plain function with typed inputs and outputs. A step logs its
//! own failure at the point it happens and returns the error; it never retries
//! and never returns a partial result.

pub mod clean;
pub mod evaluate;
pub mod ingest;
pub mod train;

pub use clean::clean_data;
pub use evaluate::evaluate_model;
pub use ingest::ingest_data;
pub use train::train_model;
