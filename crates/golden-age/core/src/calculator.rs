//! Integer arithmetic rebuilt from unit increments and decrements.
//!
//! Every operation bottoms out in [`Calculator::add`], which walks one step at
//! a time instead of using a native addition. The cost grows with operand
//! magnitude (`O(|b|)` for `add`, `O(|a|·|b|)` for `multiply`), so callers
//! should keep operands small. The counting form is the point of this module;
//! use the native operators when speed matters.
//!
//! Overflow wraps in two's complement, the same results as `i64::wrapping_*`.

use crate::error::{ArithmeticError, Result};

/// Four-function calculator plus integer power, built on unit steps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Shifts `a` by `b` using `|b|` increments (or decrements when `b < 0`).
    pub fn add(a: i64, b: i64) -> i64 {
        if b >= 0 {
            Self::step_up(a, b.unsigned_abs())
        } else {
            Self::step_down(a, b.unsigned_abs())
        }
    }

    pub fn subtract(a: i64, b: i64) -> i64 {
        // -i64::MIN is not representable; stepping up 2^63 times is the same shift.
        if b == i64::MIN {
            return Self::step_up(a, b.unsigned_abs());
        }
        Self::add(a, -b)
    }

    /// Accumulates `|a|` into a running total `|b|` times, then applies the sign.
    pub fn multiply(a: i64, b: i64) -> i64 {
        if a == 0 || b == 0 {
            return 0;
        }

        let magnitude = a.wrapping_abs();
        let mut total = 0;
        for _ in 0..b.unsigned_abs() {
            total = Self::add(total, magnitude);
        }

        if Self::same_sign(a, b) {
            total
        } else {
            total.wrapping_neg()
        }
    }

    /// Raises `base` to `exponent` by repeated multiplication.
    ///
    /// Negative exponents have no integer result and yield `0`.
    pub fn power(base: i64, exponent: i64) -> i64 {
        if exponent < 0 {
            return 0;
        }

        let mut result = 1;
        for _ in 0..exponent {
            result = Self::multiply(result, base);
        }
        result
    }

    /// Integer division truncating toward zero.
    ///
    /// Counts how many times `|b|` can be taken away from `|a|`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `b == 0`.
    pub fn divide(a: i64, b: i64) -> Result<i64> {
        if b == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        if a == 0 {
            return Ok(0);
        }

        // Magnitudes are tracked as non-positive values so |i64::MIN| fits.
        let divisor = b.unsigned_abs();
        let limit = if b < 0 { b } else { -b };
        let mut remaining = if a < 0 { a } else { -a };
        let mut quotient = 0;
        while remaining <= limit {
            remaining = Self::step_up(remaining, divisor);
            quotient = Self::add(quotient, 1);
        }

        Ok(if Self::same_sign(a, b) {
            quotient
        } else {
            quotient.wrapping_neg()
        })
    }

    #[inline]
    fn same_sign(a: i64, b: i64) -> bool {
        (a > 0) == (b > 0)
    }

    fn step_up(mut value: i64, steps: u64) -> i64 {
        for _ in 0..steps {
            value = value.wrapping_add(1);
        }
        value
    }

    fn step_down(mut value: i64, steps: u64) -> i64 {
        for _ in 0..steps {
            value = value.wrapping_sub(1);
        }
        value
    }
}
