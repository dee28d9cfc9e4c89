//! Bounded position tracker over a sequence.

/// A position inside a sequence of `sequence_size` elements.
///
/// The position always satisfies `position < sequence_size`, or is `0` for an
/// empty sequence. Moves are clamped at both ends; nothing here wraps or
/// fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursor {
    position: u64,
    sequence_size: u64,
}

impl Cursor {
    /// Creates a cursor at position `0` over an empty sequence.
    pub const fn new() -> Self {
        Self {
            position: 0,
            sequence_size: 0,
        }
    }

    /// Creates a cursor at position `0` over `size` elements.
    pub fn with_sequence_size(size: i64) -> Self {
        let mut cursor = Self::new();
        cursor.set_sequence_size(size);
        cursor
    }

    /// Replaces the bound and moves back to the start.
    ///
    /// Negative sizes are treated as an empty sequence.
    pub fn set_sequence_size(&mut self, size: i64) {
        self.sequence_size = size.max(0).unsigned_abs();
        self.reset();
    }

    pub const fn position(&self) -> u64 {
        self.position
    }

    pub const fn sequence_size(&self) -> u64 {
        self.sequence_size
    }

    pub const fn is_empty(&self) -> bool {
        self.sequence_size == 0
    }

    pub fn move_forward(&mut self, steps: i64) {
        self.shift(i128::from(steps));
    }

    pub fn move_backward(&mut self, steps: i64) {
        self.shift(-i128::from(steps));
    }

    pub fn step_forward(&mut self) {
        self.move_forward(1);
    }

    pub fn step_backward(&mut self) {
        self.move_backward(1);
    }

    /// Returns to the first element, keeping the current bound.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    fn shift(&mut self, delta: i128) {
        if self.is_empty() {
            return;
        }
        let last = i128::from(self.sequence_size - 1);
        let target = (i128::from(self.position) + delta).clamp(0, last);
        // Clamped into [0, sequence_size - 1], so it fits back into u64.
        self.position = target as u64;
    }
}
