//! Environment-driven configuration for the console client.

use std::str::FromStr;

use chrono::Month;
use num_traits::FromPrimitive;

const DEFAULT_TRADE_MONTH: Month = Month::April;

/// Runtime configuration, read once at startup.
pub struct Config {
    /// Month stamped on the sale lots of every calculation.
    pub trade_month: Month,
}

impl Config {
    /// Reads configuration from the environment, falling back to defaults.
    ///
    /// `LOTFOLIO_TRADE_MONTH` accepts a month name ("April") or a 1-12
    /// number; anything else keeps the default.
    pub fn from_env() -> Self {
        let trade_month = std::env::var("LOTFOLIO_TRADE_MONTH")
            .ok()
            .and_then(|raw| parse_month(&raw))
            .unwrap_or(DEFAULT_TRADE_MONTH);
        Config { trade_month }
    }
}

fn parse_month(raw: &str) -> Option<Month> {
    if let Ok(month) = Month::from_str(raw) {
        return Some(month);
    }
    raw.parse::<u32>().ok().and_then(Month::from_u32)
}
