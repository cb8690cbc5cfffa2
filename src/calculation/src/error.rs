//! Input validation errors.

use thiserror::Error;

/// Rejected input at the engine boundary.
///
/// Guards against values that would put NaN or infinities into the rendered
/// path, whether they arrive as input or appear while evaluating the model.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum InvalidInputError {
    /// A flight number or canvas field is NaN or infinite.
    #[error("`{field}` must be a finite number, got {value}")]
    NonFinite {
        /// Input field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A canvas dimension or the distance scale is zero or negative.
    #[error("`{field}` must be greater than zero, got {value}")]
    NonPositive {
        /// Input field name.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// Finite input too large for the model: a derived quantity overflowed.
    #[error("input overflows `{field}` (evaluated to {value})")]
    Overflow {
        /// Derived quantity that left the finite range.
        field: &'static str,
        /// Its non-finite value.
        value: f64,
    },
}

impl InvalidInputError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonFinite { field, .. } | Self::NonPositive { field, .. } | Self::Overflow { field, .. } => {
                field
            }
        }
    }
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    ensure_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::NonPositive { field, value })
    }
}

pub(crate) fn ensure_bounded(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::Overflow { field, value })
    }
}
