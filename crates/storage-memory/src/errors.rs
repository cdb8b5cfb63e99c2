//! Storage-specific error types for in-memory operations.
//!
//! This module provides error types for the in-memory ledger and converts
//! them to the storage-agnostic error types defined in `lotfolio_core`.

use thiserror::Error;

use lotfolio_core::errors::Error;

/// Storage-specific errors for the in-memory ledger.
///
/// These errors are internal to the storage layer and are converted to
/// `lotfolio_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A reader or writer panicked while holding the ledger lock.
    #[error("Ledger lock poisoned: {0}")]
    LockPoisoned(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::LockPoisoned(e) => Error::Repository(e),
        }
    }
}
