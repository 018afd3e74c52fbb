//! Crate-wide error type
//!
//! Every variant is an input or computation fault from the caller's point of
//! view; the HTTP layer answers all of them with 400.

use crate::chart::ChartError;
use crate::projection::ProjectionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Request body could not be decoded into fields
    #[error("malformed request: {0}")]
    MalformedRequest(String),
}

pub type Result<T> = std::result::Result<T, Error>;
