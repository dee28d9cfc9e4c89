use golden_age_core::{ArithmeticError, QubitCalculator, QubitWidth};

use super::State;

/// Four-valued state backed by a 2-qubit register.
///
/// Lifecycle entries use [`State2BitValue::IDLE`] before they start and
/// after they end, and [`State2BitValue::RUNNING`] while active.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum State2BitValue {
    #[default]
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
}

impl State2BitValue {
    pub const IDLE: Self = Self::Zero;
    pub const RUNNING: Self = Self::One;

    /// Converts a 2-qubit state (`0..=3`).
    pub fn from_qubit(state: i64) -> Result<Self, ArithmeticError> {
        u8::try_from(state)
            .ok()
            .and_then(Self::from_repr)
            .ok_or(ArithmeticError::OutOfRange {
                value: state,
                width: QubitWidth::Two,
            })
    }

    pub const fn to_qubit(self) -> i64 {
        self as i64
    }

    pub fn and(self, other: Self) -> Result<Self, ArithmeticError> {
        Self::from_qubit(QubitCalculator::and2(self.to_qubit(), other.to_qubit())?)
    }

    pub fn or(self, other: Self) -> Result<Self, ArithmeticError> {
        Self::from_qubit(QubitCalculator::or2(self.to_qubit(), other.to_qubit())?)
    }

    pub fn xor(self, other: Self) -> Result<Self, ArithmeticError> {
        Self::from_qubit(QubitCalculator::xor2(self.to_qubit(), other.to_qubit())?)
    }

    pub fn not(self) -> Result<Self, ArithmeticError> {
        Self::from_qubit(QubitCalculator::not2(self.to_qubit())?)
    }

    pub fn multiply(self, other: Self) -> Result<Self, ArithmeticError> {
        Self::from_qubit(QubitCalculator::multiply2(
            self.to_qubit(),
            other.to_qubit(),
        )?)
    }
}

impl TryFrom<i64> for State2BitValue {
    type Error = ArithmeticError;

    fn try_from(state: i64) -> Result<Self, Self::Error> {
        Self::from_qubit(state)
    }
}

impl From<State2BitValue> for i64 {
    fn from(value: State2BitValue) -> Self {
        value.to_qubit()
    }
}

/// Observable 2-bit state, starting at [`State2BitValue::Zero`].
pub type State2Bit = State<State2BitValue>;
