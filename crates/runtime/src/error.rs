//! Unified error type surfaced by the runtime API.
//!
//! Wraps arithmetic failures from `golden-age-core` together with lifecycle,
//! permission, configuration and lock errors so callers can bubble them up
//! with consistent context.
use std::path::PathBuf;

use thiserror::Error;

use golden_age_core::ArithmeticError;

use crate::lifecycle::LifecycleKind;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("shared state lock was poisoned")]
    LockPoisoned,

    #[error("ability '{0}' is not permitted")]
    AbilityNotPermitted(String),

    #[error("{kind} '{name}' was never started")]
    NotStarted { kind: LifecycleKind, name: String },

    #[error("service '{0}' is not declared in the program metadata")]
    UnknownService(String),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("failed to read metadata file {}: {source}", .path.display())]
    ReadMetadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse metadata RON: {0}")]
    ParseMetadata(String),

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl RuntimeError {
    /// Returns a stable identifier for this error variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "RUNTIME_LOCK_POISONED",
            Self::AbilityNotPermitted(_) => "RUNTIME_ABILITY_NOT_PERMITTED",
            Self::NotStarted { .. } => "RUNTIME_NOT_STARTED",
            Self::UnknownService(_) => "RUNTIME_UNKNOWN_SERVICE",
            Self::Arithmetic(err) => err.error_code(),
            Self::ReadMetadata { .. } => "RUNTIME_READ_METADATA",
            Self::ParseMetadata(_) => "RUNTIME_PARSE_METADATA",
            Self::InvalidConfig { .. } => "RUNTIME_INVALID_CONFIG",
        }
    }
}
