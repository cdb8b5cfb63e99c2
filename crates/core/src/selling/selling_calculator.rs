use chrono::Month;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::lots::Lot;
use crate::portfolio::InvestmentPortfolio;
use crate::selling::selector_factory::OwnershipSelectorFactory;
use crate::selling::selling_errors::{Result, SelectionError, SellingError};
use crate::selling::selling_model::{SellingCalculationResult, SellingStrategy};

/// Calculates the outcome of selling shares out of a set of purchase lots.
///
/// Every call builds a fresh portfolio from the purchase lots, draws sale
/// lots from it according to the requested strategy, and aggregates the
/// result figures. The calculator itself holds no state, so one instance can
/// serve any number of independent calculations, and a failed call leaves no
/// trace behind.
#[derive(Default, Debug, Clone)]
pub struct SellingCalculator {}

impl SellingCalculator {
    /// Creates a new instance of the SellingCalculator.
    pub fn new() -> Self {
        SellingCalculator {}
    }

    /// Calculates the result of selling `number_of_shares_to_sell` shares at
    /// `share_sell_price_usd`, drawing lots per `strategy`.
    ///
    /// Sale lots are stamped with `trade_month`. Validation runs before any
    /// processing: the share count, then the price, must be positive. A
    /// request the portfolio cannot cover yields
    /// [`SellingError::NotEnoughShares`]; the caller's purchase lots are
    /// never modified.
    pub fn calculate(
        &self,
        purchase_lots: &[Lot],
        trade_month: Month,
        strategy: SellingStrategy,
        number_of_shares_to_sell: u32,
        share_sell_price_usd: Decimal,
    ) -> Result<SellingCalculationResult> {
        if number_of_shares_to_sell == 0 {
            return Err(ValidationError::OutOfRange("number_of_shares_to_sell").into());
        }
        if share_sell_price_usd <= Decimal::ZERO {
            return Err(ValidationError::OutOfRange("share_sell_price_usd").into());
        }

        debug!(
            "Starting selling calculation: {} shares at {} via {}.",
            number_of_shares_to_sell, share_sell_price_usd, strategy
        );

        let selector = OwnershipSelectorFactory::create(strategy)?;

        let mut portfolio = InvestmentPortfolio::new();
        for lot in purchase_lots {
            portfolio.purchase(lot.clone());
        }
        let initially_available = portfolio.available_shares();

        let mut left_to_sell = number_of_shares_to_sell;
        while left_to_sell > 0 {
            let index = selector
                .select_from(portfolio.ownerships())
                .map_err(|signal| {
                    match signal {
                        SelectionError::NoOwnershipAvailable => {
                            debug!("Nothing to draw from: the portfolio has no ownerships.");
                        }
                        SelectionError::AllOwnershipsEmpty => {
                            warn!(
                                "Sale of {} shares exhausted all {} available.",
                                number_of_shares_to_sell, initially_available
                            );
                        }
                    }
                    SellingError::NotEnoughShares {
                        requested: number_of_shares_to_sell,
                        available: initially_available,
                    }
                })?;

            let ownership = portfolio.ownership_mut(index);
            let sell_count = ownership.available_count().min(left_to_sell);
            let sale_lot = Lot::new(sell_count, share_sell_price_usd, trade_month)?;
            ownership.sell(sale_lot);
            left_to_sell -= sell_count;
            debug!(
                "Drew {} shares from ownership {} ({} left to sell).",
                sell_count, index, left_to_sell
            );
        }

        Ok(SellingCalculationResult {
            remaining_number_of_shares: portfolio.available_shares(),
            cost_basis_of_sold_shares_usd: Self::cost_basis_of_sold_shares(&portfolio),
            cost_basis_of_remaining_shares_usd: Self::cost_basis_of_remaining_shares(&portfolio),
            profit_usd: Self::profit(&portfolio),
        })
    }

    /// Weighted average purchase price of the shares drawn in this sale, or
    /// `None` when no sale lot was recorded.
    fn cost_basis_of_sold_shares(portfolio: &InvestmentPortfolio) -> Option<Decimal> {
        let mut sold_count: u64 = 0;
        let mut sold_cost = Decimal::ZERO;
        for ownership in portfolio.ownerships() {
            let purchase_price = ownership.purchase_lot().price_usd();
            for sale_lot in ownership.sale_lots() {
                sold_count += u64::from(sale_lot.count());
                sold_cost += Decimal::from(sale_lot.count()) * purchase_price;
            }
        }
        if sold_count == 0 {
            None
        } else {
            Some(sold_cost / Decimal::from(sold_count))
        }
    }

    /// Weighted average purchase price of the shares still held, or `None`
    /// when the portfolio was emptied.
    fn cost_basis_of_remaining_shares(portfolio: &InvestmentPortfolio) -> Option<Decimal> {
        let mut remaining_count: u64 = 0;
        let mut remaining_cost = Decimal::ZERO;
        for ownership in portfolio.ownerships() {
            remaining_count += u64::from(ownership.available_count());
            remaining_cost +=
                Decimal::from(ownership.available_count()) * ownership.purchase_lot().price_usd();
        }
        if remaining_count == 0 {
            None
        } else {
            Some(remaining_cost / Decimal::from(remaining_count))
        }
    }

    /// Realized profit: for every sale lot, its count times the spread
    /// between the recorded sale price and the purchase price of the
    /// ownership it was drawn from.
    fn profit(portfolio: &InvestmentPortfolio) -> Decimal {
        let mut profit = Decimal::ZERO;
        for ownership in portfolio.ownerships() {
            let purchase_price = ownership.purchase_lot().price_usd();
            for sale_lot in ownership.sale_lots() {
                profit +=
                    Decimal::from(sale_lot.count()) * (sale_lot.price_usd() - purchase_price);
            }
        }
        profit
    }
}
