//! Lots module - domain model and repository trait.

mod lots_model;
mod lots_traits;

pub use lots_model::Lot;
pub use lots_traits::PurchaseLotRepositoryTrait;
