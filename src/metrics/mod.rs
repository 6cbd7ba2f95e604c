//! Regression metrics.
//!
//! Each metric is a stateless unit struct implementing `Evaluation`, so the
//! evaluate step can treat them uniformly.

pub mod regression;

pub use regression::*;
