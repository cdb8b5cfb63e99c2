//! Error types for the selling calculation engine.

use thiserror::Error;

use crate::errors::ValidationError;
use crate::selling::selling_model::SellingStrategy;

/// Type alias for Result using the selling error type.
pub type Result<T> = std::result::Result<T, SellingError>;

/// Errors surfaced to callers of the selling engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SellingError {
    /// Malformed caller input, rejected before any processing.
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A declared strategy that has no selector implementation.
    #[error("{0} selling strategy is not supported yet")]
    StrategyNotSupported(SellingStrategy),

    /// The portfolio cannot cover the requested sale quantity.
    #[error("Not enough shares to sell: requested {requested}, available {available}")]
    NotEnoughShares { requested: u32, available: u32 },
}

/// Signals raised by ownership selectors when nothing can be selected.
///
/// These never escape [`super::SellingCalculator::calculate`], which
/// translates both into [`SellingError::NotEnoughShares`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// The ownership sequence has no entries at all.
    #[error("No share ownership available")]
    NoOwnershipAvailable,

    /// Entries exist but every one of them is fully sold.
    #[error("All share ownerships are empty")]
    AllOwnershipsEmpty,
}
