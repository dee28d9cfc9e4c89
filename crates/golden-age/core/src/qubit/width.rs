use crate::config::ArithmeticConfig;
use crate::error::{ArithmeticError, Result};

/// Size of a classical "qubit" register.
///
/// A width of `n` describes the integers `0..2^n`. Nothing quantum happens
/// here: the name only reflects how many two-valued cells make up a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QubitWidth {
    /// Four states, `0..=3`.
    #[strum(to_string = "2-qubit")]
    Two,

    /// Eight states, `0..=7`.
    #[strum(to_string = "3-qubit")]
    Three,
}

impl QubitWidth {
    /// Number of bits in one state.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// Number of distinct states; the modulus for multiplication.
    pub const fn state_count(self) -> i64 {
        match self {
            Self::Two => ArithmeticConfig::TWO_QUBIT_STATES as i64,
            Self::Three => ArithmeticConfig::THREE_QUBIT_STATES as i64,
        }
    }

    /// Largest valid state.
    pub const fn max_state(self) -> i64 {
        self.state_count() - 1
    }

    /// All-ones mask for this width, used by complement.
    pub const fn mask(self) -> i64 {
        self.max_state()
    }

    pub const fn contains(self, value: i64) -> bool {
        0 <= value && value <= self.max_state()
    }

    /// Returns `value` unchanged if it lies in range.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::OutOfRange`] otherwise. Values are never
    /// masked or clamped into range.
    pub const fn validate(self, value: i64) -> Result<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ArithmeticError::OutOfRange { value, width: self })
        }
    }
}
