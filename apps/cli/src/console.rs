//! Interactive console session for the selling calculator.

use std::io::{self, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use lotfolio_core::lots::Lot;
use lotfolio_core::selling::{SellingCalculationResult, SellingError, SellingStrategy};

use crate::config::Config;
use crate::main_lib::AppState;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Runs the prompt-calculate-display loop until the user declines another
/// round or input is closed.
pub async fn run_session(state: &AppState, config: &Config) -> anyhow::Result<()> {
    loop {
        let purchase_lots = state
            .purchase_lot_repository
            .load_ordered_purchase_lots()
            .await?;
        display_purchase_lots(&purchase_lots);
        println!();

        let shares_to_sell = ask_number_of_shares_to_sell()?;
        let sell_price_usd = ask_share_sell_price()?;
        let strategy = ask_selling_strategy()?;

        match state.selling_calculator.calculate(
            &purchase_lots,
            config.trade_month,
            strategy,
            shares_to_sell,
            sell_price_usd,
        ) {
            Ok(result) => display_calculation_result(&result),
            Err(SellingError::StrategyNotSupported(strategy)) => display_error(&format!(
                "Sorry but {strategy} selling strategy is not supported yet."
            )),
            Err(SellingError::NotEnoughShares { .. }) => {
                display_error("You do not have enough shares to sell.");
            }
            Err(error) => display_error(&error.to_string()),
        }

        if !ask_another_calculation()? {
            break;
        }
        println!("-------------------------------------------------");
    }

    println!("Thank you! Goodbye.");
    Ok(())
}

fn display_purchase_lots(purchase_lots: &[Lot]) {
    println!("Available purchase lots:");
    for lot in purchase_lots {
        println!(
            "   {} shares purchased at ${}/share in {}",
            lot.count(),
            lot.price_usd(),
            lot.trade_month().name()
        );
    }
}

fn display_calculation_result(result: &SellingCalculationResult) {
    println!("Calculation result:");
    println!(
        "  1. The remaining number of shares after sale: {}",
        result.remaining_number_of_shares
    );
    println!(
        "  2. The cost basis per share of the sold shares: {}",
        format_nullable_money(result.cost_basis_of_sold_shares_usd)
    );
    println!(
        "  3. The cost basis per share of the remaining shares after the sale: {}.",
        format_nullable_money(result.cost_basis_of_remaining_shares_usd)
    );
    println!(
        "  4. The total profit or loss of the sale: ${:.2}",
        result.profit_usd
    );
}

fn format_nullable_money(money_usd: Option<Decimal>) -> String {
    match money_usd {
        Some(amount) => format!("${amount:.2}"),
        None => "N/A".to_string(),
    }
}

fn ask_number_of_shares_to_sell() -> io::Result<u32> {
    loop {
        let raw = ask("Please enter number of shares to sell: ")?;
        if let Ok(count) = raw.trim().parse::<u32>() {
            if count > 0 {
                return Ok(count);
            }
        }
        display_error(
            "The entered value is not valid. It should be an integer number and should be greater than zero.",
        );
    }
}

fn ask_share_sell_price() -> io::Result<Decimal> {
    loop {
        let raw = ask("Please enter price in USD per share: ")?;
        if let Ok(price) = Decimal::from_str(raw.trim()) {
            if price > Decimal::ZERO {
                return Ok(price);
            }
        }
        display_error(
            "The entered value is not valid. It should be a number and should be greater than zero.",
        );
    }
}

fn ask_selling_strategy() -> io::Result<SellingStrategy> {
    println!("Available selling strategies:");
    for (index, strategy) in SellingStrategy::ALL.iter().enumerate() {
        println!("  Enter {index} for {strategy} selling strategy");
    }

    loop {
        let raw = ask("Please select a strategy number: ")?;
        if let Ok(selected) = raw.trim().parse::<usize>() {
            if let Some(strategy) = SellingStrategy::ALL.get(selected) {
                return Ok(*strategy);
            }
        }
        display_error("The entered value is not valid. It should be one of specified above.");
    }
}

fn ask_another_calculation() -> io::Result<bool> {
    loop {
        let raw = ask("Do you want to calculate one more time (y/n)?: ")?;
        match raw.trim() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => display_error("The entered value is not valid. Please enter 'y' or 'n'."),
        }
    }
}

fn ask(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        // Input closed (for example Ctrl-D); bail out instead of spinning.
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(line)
}

fn display_error(message: &str) {
    println!("{RED}{message}{RESET}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn formats_present_and_absent_money() {
        assert_eq!(format_nullable_money(Some(dec!(20))), "$20.00");
        assert_eq!(format_nullable_money(Some(dec!(26.67))), "$26.67");
        assert_eq!(format_nullable_money(None), "N/A");
    }
}
