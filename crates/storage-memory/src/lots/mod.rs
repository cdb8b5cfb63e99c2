//! In-memory storage implementation for purchase lots.

mod repository;

pub use repository::InMemoryPurchaseLotRepository;
