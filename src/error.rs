//! Validation errors for fee calculations.

use std::fmt;

/// Errors returned by fee model operations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeeError {
    /// Amount must be a finite, non-negative number of dollars.
    InvalidAmount { amount: f64 },
    /// Input did not name any known investment category.
    UnknownCategory(String),
}

impl fmt::Display for FeeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeeError::InvalidAmount { amount } => {
                write!(f, "amount must be finite and non-negative, got {amount}")
            }
            FeeError::UnknownCategory(input) => {
                write!(f, "unknown investment category: {input:?}")
            }
        }
    }
}

impl std::error::Error for FeeError {}
