//! Runtime glue around the `golden-age-core` handlers.
//!
//! This crate turns the pure calculators and stores into something an
//! application can hold on to: observable state cells, a lifecycle registry
//! for tasks, services and abilities, program metadata loaded from disk, and
//! explicit shared handles for the cursor and permission stores.
//!
//! Modules are organized by responsibility:
//! - [`state`] provides [`State`] and the 2-bit [`State2Bit`] cell
//! - [`lifecycle`] defines the [`GoldenAge`] trait and its registry
//! - [`metadata`] loads [`DesktopMetadata`] and exposes [`ProgramMetadata`]
//! - [`shared`] wraps stores in a mutex for multi-owner access
//! - [`runtime`] hosts the owner object, its builder and configuration
pub mod counter;
pub mod error;
pub mod lifecycle;
pub mod metadata;
pub mod runtime;
pub mod shared;
pub mod state;

pub use counter::CounterModel;
pub use error::{Result, RuntimeError};
pub use lifecycle::{GoldenAge, LifecycleKind, LifecycleRegistry};
pub use metadata::{DesktopMetadata, MetadataProgram, ProgramMetadata};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use shared::Shared;
pub use state::{State, State2Bit, State2BitValue, Subscription};
