//! Bitwise and modular arithmetic over 2-bit and 3-bit state spaces.
//!
//! Each operation validates every input against its [`QubitWidth`] before
//! computing, so an invalid call fails without producing a value. The
//! width-generic functions ([`QubitCalculator::and`] and friends) back the
//! fixed-width shorthands (`and2`, `xor3`, ...).

mod width;

pub use width::QubitWidth;

use crate::error::Result;

/// Bounded bitwise calculator for 2- and 3-qubit registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QubitCalculator;

impl QubitCalculator {
    // ========================================================================
    // Width-generic operations
    // ========================================================================

    pub fn and(width: QubitWidth, a: i64, b: i64) -> Result<i64> {
        let (a, b) = Self::validate_pair(width, a, b)?;
        Ok(a & b)
    }

    pub fn or(width: QubitWidth, a: i64, b: i64) -> Result<i64> {
        let (a, b) = Self::validate_pair(width, a, b)?;
        Ok(a | b)
    }

    pub fn xor(width: QubitWidth, a: i64, b: i64) -> Result<i64> {
        let (a, b) = Self::validate_pair(width, a, b)?;
        Ok(a ^ b)
    }

    /// Complement within the register, not two's-complement negation.
    pub fn not(width: QubitWidth, state: i64) -> Result<i64> {
        let state = width.validate(state)?;
        Ok(state ^ width.mask())
    }

    /// Multiplication in the cyclic group of `width.state_count()` elements.
    pub fn multiply(width: QubitWidth, a: i64, b: i64) -> Result<i64> {
        let (a, b) = Self::validate_pair(width, a, b)?;
        Ok((a * b) % width.state_count())
    }

    fn validate_pair(width: QubitWidth, a: i64, b: i64) -> Result<(i64, i64)> {
        Ok((width.validate(a)?, width.validate(b)?))
    }

    // ========================================================================
    // 2-qubit operations (4 states, 0 to 3)
    // ========================================================================

    pub fn and2(a: i64, b: i64) -> Result<i64> {
        Self::and(QubitWidth::Two, a, b)
    }

    pub fn or2(a: i64, b: i64) -> Result<i64> {
        Self::or(QubitWidth::Two, a, b)
    }

    pub fn xor2(a: i64, b: i64) -> Result<i64> {
        Self::xor(QubitWidth::Two, a, b)
    }

    pub fn not2(state: i64) -> Result<i64> {
        Self::not(QubitWidth::Two, state)
    }

    pub fn multiply2(a: i64, b: i64) -> Result<i64> {
        Self::multiply(QubitWidth::Two, a, b)
    }

    // ========================================================================
    // 3-qubit operations (8 states, 0 to 7)
    // ========================================================================

    pub fn and3(a: i64, b: i64) -> Result<i64> {
        Self::and(QubitWidth::Three, a, b)
    }

    pub fn or3(a: i64, b: i64) -> Result<i64> {
        Self::or(QubitWidth::Three, a, b)
    }

    pub fn xor3(a: i64, b: i64) -> Result<i64> {
        Self::xor(QubitWidth::Three, a, b)
    }

    pub fn not3(state: i64) -> Result<i64> {
        Self::not(QubitWidth::Three, state)
    }

    pub fn multiply3(a: i64, b: i64) -> Result<i64> {
        Self::multiply(QubitWidth::Three, a, b)
    }
}
