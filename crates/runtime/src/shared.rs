//! Explicitly shared mutable stores.
//!
//! The cursor and the permission set are plain values in `golden-age-core`.
//! When more than one owner needs the same store, wrap it in [`Shared`]: every
//! read-modify-write runs inside a single lock acquisition.

use std::sync::{Arc, Mutex};

use crate::error::{Result, RuntimeError};

/// Cloneable handle to a store guarded by a mutex.
#[derive(Debug, Default)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }

    /// Runs `f` with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::LockPoisoned`] if a previous holder panicked.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R> {
        let mut guard = self.0.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        Ok(f(&mut guard))
    }

    /// Returns a copy of the current store contents.
    pub fn snapshot(&self) -> Result<T>
    where
        T: Clone,
    {
        self.with(|value| value.clone())
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
