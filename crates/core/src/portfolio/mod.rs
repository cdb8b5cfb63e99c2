//! Portfolio module - the share ownership ledger.

mod portfolio_model;

pub use portfolio_model::{InvestmentPortfolio, ShareOwnership};
