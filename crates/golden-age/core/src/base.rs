//! Radix conversion for signed integers.

use arrayvec::ArrayVec;

use crate::config::ArithmeticConfig;

/// Output base supported by [`BaseConverter`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Radix {
    #[strum(to_string = "binary")]
    Binary = 2,
    #[strum(to_string = "octal")]
    Octal = 8,
    #[strum(to_string = "hex")]
    Hex = 16,
}

impl Radix {
    pub const fn base(self) -> u64 {
        self as u64
    }
}

/// Renders integers as unpadded digit strings.
///
/// Zero is always `"0"`. Other values are written as the digits of their
/// magnitude, most significant first, with a leading `-` for negatives.
/// Hex digits are uppercase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseConverter;

impl BaseConverter {
    pub fn to_binary_string(n: i64) -> String {
        Self::to_radix_string(n, Radix::Binary)
    }

    pub fn to_octal_string(n: i64) -> String {
        Self::to_radix_string(n, Radix::Octal)
    }

    pub fn to_hex_string(n: i64) -> String {
        Self::to_radix_string(n, Radix::Hex)
    }

    pub fn to_radix_string(n: i64, radix: Radix) -> String {
        if n == 0 {
            return "0".to_owned();
        }

        let base = radix.base();
        let mut magnitude = n.unsigned_abs();
        // Least significant digit first; binary of 2^63 is the longest case.
        let mut digits: ArrayVec<u8, { ArithmeticConfig::MAX_DIGITS }> = ArrayVec::new();
        while magnitude > 0 {
            digits.push(ArithmeticConfig::DIGITS[(magnitude % base) as usize]);
            magnitude /= base;
        }

        let mut out = String::with_capacity(digits.len() + 1);
        if n < 0 {
            out.push('-');
        }
        out.extend(digits.iter().rev().map(|&d| char::from(d)));
        out
    }
}
