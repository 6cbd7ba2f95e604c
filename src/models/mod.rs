//! Model strategies.
//!
//! A `Model` knows how to fit; the value it returns is a `Regressor` that knows
//! how to predict. Only ordinary least squares is implemented.

pub mod linear;

pub use linear::*;
