/// Compile-time constants shared by the arithmetic handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArithmeticConfig;

impl ArithmeticConfig {
    // ===== qubit state spaces =====
    /// Number of distinct states in a 2-qubit system.
    pub const TWO_QUBIT_STATES: u8 = 4;
    /// Number of distinct states in a 3-qubit system.
    pub const THREE_QUBIT_STATES: u8 = 8;

    // ===== base conversion =====
    /// Digit alphabet for every supported radix (uppercase hex).
    pub const DIGITS: &'static [u8; 16] = b"0123456789ABCDEF";
    /// Longest digit string of an `i64` magnitude (binary, `2^63`).
    pub const MAX_DIGITS: usize = 64;
}
