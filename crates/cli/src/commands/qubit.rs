//! Qubit calculator command

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use golden_age_core::{QubitCalculator, QubitWidth};

use crate::output;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum WidthArg {
    #[value(name = "2")]
    Two,
    #[value(name = "3")]
    Three,
}

impl From<WidthArg> for QubitWidth {
    fn from(width: WidthArg) -> Self {
        match width {
            WidthArg::Two => QubitWidth::Two,
            WidthArg::Three => QubitWidth::Three,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum QubitOp {
    And,
    Or,
    Xor,
    Not,
    Multiply,
}

/// Bitwise and modular math on 2- and 3-qubit states
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct Qubit {
    /// Register width in qubits
    #[arg(long, value_enum, default_value = "2")]
    pub width: WidthArg,

    /// Operation to perform
    #[arg(value_enum)]
    pub op: QubitOp,

    /// First state
    pub a: i64,

    /// Second state (not used by `not`)
    pub b: Option<i64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Qubit {
    pub fn evaluate(&self) -> Result<i64> {
        let width = QubitWidth::from(self.width);
        let value = match (self.op, self.b) {
            (QubitOp::Not, None) => QubitCalculator::not(width, self.a)?,
            (QubitOp::Not, Some(_)) => bail!("`not` takes a single state"),
            (_, None) => bail!("{:?} needs two states", self.op),
            (QubitOp::And, Some(b)) => QubitCalculator::and(width, self.a, b)?,
            (QubitOp::Or, Some(b)) => QubitCalculator::or(width, self.a, b)?,
            (QubitOp::Xor, Some(b)) => QubitCalculator::xor(width, self.a, b)?,
            (QubitOp::Multiply, Some(b)) => QubitCalculator::multiply(width, self.a, b)?,
        };
        Ok(value)
    }

    pub fn execute(self) -> Result<()> {
        let value = self.evaluate()?;
        output::emit(self.json, "=", &value)
    }
}
