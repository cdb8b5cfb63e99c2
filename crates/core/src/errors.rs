//! Core error types for the selling calculation engine.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! are converted to these types by the storage layer.

use thiserror::Error;

use crate::selling::SellingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the application.
///
/// This enum represents all possible errors that can occur in the application.
/// Storage-specific errors are wrapped in string form to keep this type
/// storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Selling calculation failed: {0}")]
    Selling(#[from] SellingError),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A count or price that must be strictly positive was not. Carries the
    /// offending parameter name.
    #[error("'{0}' must be greater than zero")]
    OutOfRange(&'static str),

    /// A strategy identifier with no declared counterpart.
    #[error("Unknown selling strategy: {0}")]
    UnknownStrategy(String),
}
