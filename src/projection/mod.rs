//! Projection engine for compound interest with periodic contributions

mod error;
mod input;
mod engine;
mod series;

pub use error::ProjectionError;
pub use input::{CompoundingFrequency, ProjectionInput};
pub use engine::{compute, ProjectionConfig, ProjectionEngine, ZeroRatePolicy};
pub use series::{ProjectionResult, YearlyPoint};

// ============================================================================
// Projection Limits
// ============================================================================
// The yearly series holds one point per year, so the horizon bounds both the
// work done per request and the size of the response.

/// Longest projection horizon accepted, in years
pub const MAX_HORIZON_YEARS: u32 = 1000;
