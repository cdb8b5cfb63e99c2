//! Selling module - strategies, selectors, and the calculation engine.

mod selector_factory;
mod selling_calculator;
mod selling_errors;
mod selling_model;
mod selling_traits;

pub mod selectors;

pub use selector_factory::OwnershipSelectorFactory;
pub use selling_calculator::SellingCalculator;
pub use selling_errors::{Result, SelectionError, SellingError};
pub use selling_model::{SellingCalculationResult, SellingStrategy};
pub use selling_traits::OwnershipSelector;
