//! Counting arithmetic, bounded bit-state math and small stateful utilities.
//!
//! `golden-age-core` holds the pure building blocks shared by the runtime and
//! the command-line tools. Nothing in this crate performs I/O or keeps global
//! state: the two stores ([`Cursor`] and [`AbilityPermissions`]) are plain
//! values owned by whoever constructs them.
//!
//! - [`calculator`] rebuilds integer arithmetic out of unit steps
//! - [`qubit`] performs bitwise and modular math over 2- and 3-bit ranges
//! - [`base`] renders integers in binary, octal and hexadecimal
//! - [`cursor`] tracks a clamped position inside a sequence
//! - [`permissions`] keeps the set of granted ability names
pub mod base;
pub mod calculator;
pub mod config;
pub mod cursor;
pub mod error;
pub mod permissions;
pub mod qubit;

pub use base::{BaseConverter, Radix};
pub use calculator::Calculator;
pub use config::ArithmeticConfig;
pub use cursor::Cursor;
pub use error::{ArithmeticError, Result};
pub use permissions::AbilityPermissions;
pub use qubit::{QubitCalculator, QubitWidth};
