//! Cursor walk command

use anyhow::Result;
use clap::Parser;
use console::style;

use golden_age_core::Cursor;
use golden_age_runtime::RuntimeConfig;

/// Walk a bounded cursor through a sequence
///
/// Positive moves go forward, negative moves go backward. The position is
/// clamped to the sequence after every move.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct CursorWalk {
    /// Sequence length (defaults to GOLDEN_AGE_SEQUENCE_SIZE)
    #[arg(long)]
    pub size: Option<i64>,

    /// Moves to apply in order
    pub moves: Vec<i64>,

    /// Print positions as JSON
    #[arg(long)]
    pub json: bool,
}

impl CursorWalk {
    /// Position after each move.
    pub fn positions_in(&self, size: i64) -> Vec<u64> {
        let mut cursor = Cursor::with_sequence_size(size);
        self.moves
            .iter()
            .map(|&steps| {
                cursor.move_forward(steps);
                cursor.position()
            })
            .collect()
    }

    pub fn execute(self) -> Result<()> {
        let size = match self.size {
            Some(size) => size,
            None => RuntimeConfig::from_env()?.sequence_size,
        };
        let positions = self.positions_in(size);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&positions)?);
            return Ok(());
        }

        println!(
            "{} sequence of {}",
            style("cursor").yellow().bold(),
            size.max(0)
        );
        for (steps, position) in self.moves.iter().zip(&positions) {
            println!("  {:>+6} {} {}", steps, style("→").cyan(), position);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(moves: &[i64]) -> CursorWalk {
        CursorWalk {
            size: None,
            moves: moves.to_vec(),
            json: false,
        }
    }

    #[test]
    fn negative_moves_go_backward_and_clamp() {
        assert_eq!(walk(&[3, -1, -10, i64::MIN, i64::MAX]).positions_in(5), [3, 2, 0, 0, 4]);
    }

    #[test]
    fn empty_sequence_stays_at_zero() {
        assert_eq!(walk(&[2, -2]).positions_in(-3), [0, 0]);
    }
}
