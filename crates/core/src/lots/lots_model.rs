//! Lot domain model.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A block of shares traded at one price in one calendar month.
///
/// A lot records either a purchase (held by a portfolio entry) or a sale
/// drawn against a purchase. Fields are fixed at construction and `new`
/// rejects non-positive counts and prices, so a lot obtained from it is
/// always well formed. Deserialization funnels through the same checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawLot")]
pub struct Lot {
    count: u32,
    price_usd: Decimal,
    trade_month: Month,
}

/// Unvalidated wire form of [`Lot`]. Conversion runs [`Lot::new`], so a lot
/// read from serialized data obeys the construction checks.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLot {
    count: u32,
    price_usd: Decimal,
    trade_month: Month,
}

impl TryFrom<RawLot> for Lot {
    type Error = ValidationError;

    fn try_from(raw: RawLot) -> Result<Self, Self::Error> {
        Lot::new(raw.count, raw.price_usd, raw.trade_month)
    }
}

impl Lot {
    /// Creates a lot of `count` shares at `price_usd` per share.
    ///
    /// The trade month is recordkeeping only and never enters cost basis or
    /// profit arithmetic.
    pub fn new(
        count: u32,
        price_usd: Decimal,
        trade_month: Month,
    ) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::OutOfRange("count"));
        }
        if price_usd <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange("price_usd"));
        }
        Ok(Lot {
            count,
            price_usd,
            trade_month,
        })
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn price_usd(&self) -> Decimal {
        self.price_usd
    }

    pub fn trade_month(&self) -> Month {
        self.trade_month
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn new_accepts_positive_count_and_price() {
        let lot = Lot::new(42, dec!(20), Month::January);
        assert!(lot.is_ok(), "Expected a valid lot, got {:?}", lot.err());
        let lot = lot.unwrap();
        assert_eq!(lot.count(), 42);
        assert_eq!(lot.price_usd(), dec!(20));
        assert_eq!(lot.trade_month(), Month::January);
    }

    #[test]
    fn new_rejects_zero_count() {
        assert_eq!(
            Lot::new(0, dec!(20), Month::January),
            Err(ValidationError::OutOfRange("count"))
        );
    }

    #[test]
    fn new_rejects_zero_price() {
        assert_eq!(
            Lot::new(1, Decimal::ZERO, Month::January),
            Err(ValidationError::OutOfRange("price_usd"))
        );
    }

    #[test]
    fn new_rejects_negative_price() {
        assert_eq!(
            Lot::new(1, dec!(-0.01), Month::January),
            Err(ValidationError::OutOfRange("price_usd"))
        );
    }

    #[test]
    fn deserializing_accepts_a_well_formed_lot() {
        let lot: Lot =
            serde_json::from_str(r#"{"count":100,"priceUsd":20.0,"tradeMonth":"January"}"#)
                .unwrap();
        assert_eq!(lot.count(), 100);
        assert_eq!(lot.price_usd(), dec!(20));
        assert_eq!(lot.trade_month(), Month::January);
    }

    #[test]
    fn deserializing_runs_the_construction_checks() {
        let zero_count =
            serde_json::from_str::<Lot>(r#"{"count":0,"priceUsd":20.0,"tradeMonth":"January"}"#);
        assert!(zero_count.is_err(), "a zero count must not deserialize");

        let negative_price =
            serde_json::from_str::<Lot>(r#"{"count":10,"priceUsd":-5.0,"tradeMonth":"January"}"#);
        assert!(
            negative_price.is_err(),
            "a negative price must not deserialize"
        );
    }
}
