//! Lotfolio Core - Domain entities, the selling engine, and traits.
//!
//! This crate contains the share selling calculation logic for Lotfolio.
//! It is storage-agnostic and defines traits that are implemented
//! by the `storage-memory` crate.

pub mod errors;
pub mod lots;
pub mod portfolio;
pub mod selling;

// Re-export common types from lot and portfolio modules
pub use lots::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
