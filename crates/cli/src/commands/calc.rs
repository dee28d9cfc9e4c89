//! Counting calculator command

use anyhow::Result;
use clap::{Parser, ValueEnum};

use golden_age_core::Calculator;

use crate::output;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

/// Integer arithmetic built from unit steps
///
/// Every operation counts one step at a time, so large operands are slow.
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct Calc {
    /// Operation to perform
    #[arg(value_enum)]
    pub op: CalcOp,

    /// Left operand (base for `power`)
    pub a: i64,

    /// Right operand (exponent for `power`)
    pub b: i64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Calc {
    pub fn evaluate(&self) -> Result<i64> {
        let (a, b) = (self.a, self.b);
        let value = match self.op {
            CalcOp::Add => Calculator::add(a, b),
            CalcOp::Subtract => Calculator::subtract(a, b),
            CalcOp::Multiply => Calculator::multiply(a, b),
            CalcOp::Divide => Calculator::divide(a, b)?,
            CalcOp::Power => Calculator::power(a, b),
        };
        tracing::debug!(op = ?self.op, a, b, value, "calculated");
        Ok(value)
    }

    pub fn execute(self) -> Result<()> {
        let value = self.evaluate()?;
        output::emit(self.json, "=", &value)
    }
}
