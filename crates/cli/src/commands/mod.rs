//! Command implementations for the golden-age binary
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod abilities;
mod base;
mod calc;
mod counter;
mod cursor;
mod metadata;
mod qubit;

pub use abilities::Abilities;
pub use base::Base;
pub use calc::Calc;
pub use counter::Counter;
pub use cursor::CursorWalk;
pub use metadata::Metadata;
pub use qubit::Qubit;
