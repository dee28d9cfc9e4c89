//! Base conversion command

use anyhow::Result;
use clap::{Parser, ValueEnum};
use console::style;
use serde::Serialize;

use golden_age_core::{BaseConverter, Radix};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RadixArg {
    #[value(alias = "bin")]
    Binary,
    #[value(alias = "oct")]
    Octal,
    Hex,
}

impl From<RadixArg> for Radix {
    fn from(radix: RadixArg) -> Self {
        match radix {
            RadixArg::Binary => Radix::Binary,
            RadixArg::Octal => Radix::Octal,
            RadixArg::Hex => Radix::Hex,
        }
    }
}

#[derive(Debug, Serialize)]
struct Conversion {
    radix: Radix,
    digits: String,
}

/// Render an integer in binary, octal and hexadecimal
#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct Base {
    /// Value to convert
    pub value: i64,

    /// Only print this radix
    #[arg(long, value_enum)]
    pub radix: Option<RadixArg>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Base {
    fn conversions(&self) -> Vec<Conversion> {
        let radixes = match self.radix {
            Some(radix) => vec![Radix::from(radix)],
            None => vec![Radix::Binary, Radix::Octal, Radix::Hex],
        };
        radixes
            .into_iter()
            .map(|radix| Conversion {
                radix,
                digits: BaseConverter::to_radix_string(self.value, radix),
            })
            .collect()
    }

    pub fn execute(self) -> Result<()> {
        let conversions = self.conversions();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&conversions)?);
            return Ok(());
        }

        for Conversion { radix, digits } in conversions {
            println!("{:>7} {}", style(radix).cyan().bold(), digits);
        }
        Ok(())
    }
}
