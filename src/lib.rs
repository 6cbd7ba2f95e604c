//! `score-pipeline` library crate.
//!
//! A linear training pipeline for tabular review-score data:
//! `ingest -> clean -> train -> evaluate`.
//!
//! The binary (`run-pipeline`) is a thin wrapper around this library so that:
//!
//! - every step is testable without spawning processes
//! - the steps and strategies can be reused by other front-ends

pub mod app;
pub mod cleaning;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod metrics;
pub mod models;
pub mod report;
pub mod steps;
pub mod tracking;
