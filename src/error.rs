//! Error types for store access.
//!
//! Absence of a value is never an error here: a guild without a mute role or
//! without temp actions is a normal outcome and surfaces as `None` / an empty
//! map. The only fault is the backing store being unreachable, and it is
//! surfaced to the caller unmodified - no retries, no translation.

use thiserror::Error;

/// Fault raised by the backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or the operation failed at the I/O
    /// level. Cache state is guaranteed untouched when a write fails with
    /// this error.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StoreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}
