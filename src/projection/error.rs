//! Faults raised while validating inputs or evaluating a projection

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A field could not be parsed or is outside its accepted range
    #[error("invalid value for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The annuity factor divides by the periodic rate, which is zero
    #[error("float division by zero: contributions cannot be compounded at a 0% interest rate")]
    DivisionByZero,

    /// Growth factor left the range of finite floats
    #[error("projected amount overflowed at year {year}")]
    Overflow { year: u32 },
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
