//! Selling strategy and calculation result models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Enum representing the declared lot selection strategies.
///
/// Only FIFO has a selector implementation today; the factory answers every
/// other strategy with [`super::SellingError::StrategyNotSupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SellingStrategy {
    Fifo,
    Lifo,
    AverageCost,
    LowestTaxExposure,
    HighestTaxExposure,
    LotBased,
}

impl SellingStrategy {
    /// Every declared strategy, in menu order.
    pub const ALL: [SellingStrategy; 6] = [
        SellingStrategy::Fifo,
        SellingStrategy::Lifo,
        SellingStrategy::AverageCost,
        SellingStrategy::LowestTaxExposure,
        SellingStrategy::HighestTaxExposure,
        SellingStrategy::LotBased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SellingStrategy::Fifo => "FIFO",
            SellingStrategy::Lifo => "LIFO",
            SellingStrategy::AverageCost => "AverageCost",
            SellingStrategy::LowestTaxExposure => "LowestTaxExposure",
            SellingStrategy::HighestTaxExposure => "HighestTaxExposure",
            SellingStrategy::LotBased => "LotBased",
        }
    }
}

impl fmt::Display for SellingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SellingStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" => Ok(SellingStrategy::Fifo),
            "LIFO" => Ok(SellingStrategy::Lifo),
            "AverageCost" => Ok(SellingStrategy::AverageCost),
            "LowestTaxExposure" => Ok(SellingStrategy::LowestTaxExposure),
            "HighestTaxExposure" => Ok(SellingStrategy::HighestTaxExposure),
            "LotBased" => Ok(SellingStrategy::LotBased),
            _ => Err(ValidationError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Immutable outcome of one selling calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingCalculationResult {
    /// Shares still available across the portfolio after the sale.
    pub remaining_number_of_shares: u32,
    /// Weighted average purchase price of the shares sold. Absent when the
    /// sale drew nothing.
    pub cost_basis_of_sold_shares_usd: Option<Decimal>,
    /// Weighted average purchase price of the shares still held. Absent when
    /// the sale emptied the portfolio.
    pub cost_basis_of_remaining_shares_usd: Option<Decimal>,
    /// Realized profit of the sale: for every sale lot, its count times the
    /// spread between sale price and purchase price.
    pub profit_usd: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn strategy_identifiers_parse_back_to_their_variant() {
        for strategy in SellingStrategy::ALL {
            assert_eq!(SellingStrategy::from_str(strategy.as_str()), Ok(strategy));
        }
    }

    #[test]
    fn unknown_strategy_identifier_is_rejected() {
        assert_eq!(
            SellingStrategy::from_str("RANDOM"),
            Err(ValidationError::UnknownStrategy("RANDOM".to_string()))
        );
    }

    #[test]
    fn result_serializes_with_camel_case_and_null_absences() {
        let result = SellingCalculationResult {
            remaining_number_of_shares: 0,
            cost_basis_of_sold_shares_usd: Some(dec!(26.5)),
            cost_basis_of_remaining_shares_usd: None,
            profit_usd: dec!(1550),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["remainingNumberOfShares"], 0);
        assert!(json["costBasisOfSoldSharesUsd"].is_number());
        assert!(json["costBasisOfRemainingSharesUsd"].is_null());
        assert!(json["profitUsd"].is_number());
    }
}
