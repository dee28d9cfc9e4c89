//! Command-line front end for the Golden Age handlers.
//!
//! Run with: `golden-age <command>`. Configuration is read from `GOLDEN_AGE_*`
//! environment variables (a `.env` file is honored) and logging from
//! `RUST_LOG`.

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Abilities, Base, Calc, Counter, CursorWalk, Metadata, Qubit};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "golden_age=info,golden_age_runtime=info";

/// Counting arithmetic, bit-state math and friends
#[derive(Parser)]
#[command(name = "golden-age")]
#[command(about = "Golden Age arithmetic handlers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Integer arithmetic built from unit steps
    Calc(Calc),

    /// Bitwise and modular math on 2- and 3-qubit states
    Qubit(Qubit),

    /// Render an integer in binary, octal and hexadecimal
    Base(Base),

    /// Walk a bounded cursor through a sequence
    Cursor(CursorWalk),

    /// Click the observable counter
    Counter(Counter),

    /// Grant, revoke and check ability permissions
    Abilities(Abilities),

    /// Show program metadata from a RON file
    Metadata(Metadata),
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GOLDEN_AGE_* and RUST_LOG)
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Calc(cmd) => cmd.execute(),
        Command::Qubit(cmd) => cmd.execute(),
        Command::Base(cmd) => cmd.execute(),
        Command::Cursor(cmd) => cmd.execute(),
        Command::Counter(cmd) => cmd.execute(),
        Command::Abilities(cmd) => cmd.execute(),
        Command::Metadata(cmd) => cmd.execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn negative_operands_parse() {
        let cli = Cli::try_parse_from(["golden-age", "calc", "divide", "-7", "2"]).unwrap();
        let Command::Calc(calc) = cli.command else {
            panic!("expected calc command");
        };
        assert_eq!(calc.evaluate().unwrap(), -3);
    }

    #[test]
    fn cursor_moves_parse() {
        let cli =
            Cli::try_parse_from(["golden-age", "cursor", "--size", "5", "100", "-100", "2"])
                .unwrap();
        let Command::Cursor(walk) = cli.command else {
            panic!("expected cursor command");
        };
        assert_eq!(walk.size, Some(5));
        assert_eq!(walk.positions_in(5), vec![4, 0, 2]);
    }

    #[test]
    fn qubit_width_is_validated_by_the_calculator() {
        let cli =
            Cli::try_parse_from(["golden-age", "qubit", "--width", "2", "and", "5", "0"]).unwrap();
        let Command::Qubit(qubit) = cli.command else {
            panic!("expected qubit command");
        };
        assert!(qubit.evaluate().is_err());
    }
}
