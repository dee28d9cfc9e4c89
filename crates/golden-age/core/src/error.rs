//! Error types raised by the arithmetic handlers.
//!
//! Only two operations can fail: integer division by zero and qubit inputs
//! outside their declared range. Base conversion, the cursor and the
//! permission set are total over their inputs.

use crate::qubit::QubitWidth;

/// Errors surfaced by [`Calculator`](crate::Calculator) and
/// [`QubitCalculator`](crate::QubitCalculator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArithmeticError {
    /// `divide` was called with a zero divisor.
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// A qubit state fell outside `0..=width.max_state()`.
    #[error("{width} states must be between 0 and {max}, got {value}", max = .width.max_state())]
    OutOfRange { value: i64, width: QubitWidth },
}

impl ArithmeticError {
    /// Returns a stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "ARITHMETIC_DIVISION_BY_ZERO",
            Self::OutOfRange { .. } => "ARITHMETIC_OUT_OF_RANGE",
        }
    }
}

pub type Result<T> = core::result::Result<T, ArithmeticError>;
