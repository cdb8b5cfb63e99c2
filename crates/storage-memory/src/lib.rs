//! In-memory storage implementation for Lotfolio.
//!
//! This crate provides process-local storage and implements the repository
//! traits defined in `lotfolio-core`. Nothing is written to disk: the ledger
//! lives and dies with the process, which is all the calculator needs.
//!
//! # Architecture
//!
//! This crate is the only place in the application where storage exists.
//! All other crates are storage-agnostic and work with traits.
//!
//! ```text
//!   core (domain)
//!         │
//!         ▼
//! storage-memory (this crate)
//!         │
//!         ▼
//!  process memory
//! ```

pub mod errors;

// Repository implementations
pub mod lots;

// Re-export storage errors
pub use errors::StorageError;

// Re-export from lotfolio-core for convenience
pub use lotfolio_core::errors::{Error, Result};
