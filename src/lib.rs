//! Compound Interest - growth projections for a deposit with periodic contributions
//!
//! This library provides:
//! - Closed-form projections with monthly or annual compounding
//! - Year-by-year series with and without interest
//! - PNG chart rendering of the two growth paths
//! - An HTTP surface (HTML form and JSON API) that runs locally or on AWS Lambda

pub mod chart;
pub mod config;
pub mod error;
pub mod format;
pub mod projection;
pub mod web;

// Re-export commonly used types
pub use config::Settings;
pub use error::Error;
pub use projection::{
    compute, CompoundingFrequency, ProjectionEngine, ProjectionInput, ProjectionResult, YearlyPoint,
};
