use std::sync::Arc;

use anyhow::Context;
use chrono::Month;
use rust_decimal_macros::dec;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lotfolio_core::lots::{Lot, PurchaseLotRepositoryTrait};
use lotfolio_core::selling::SellingCalculator;
use lotfolio_storage_memory::lots::InMemoryPurchaseLotRepository;

pub struct AppState {
    pub purchase_lot_repository: Arc<dyn PurchaseLotRepositoryTrait>,
    pub selling_calculator: SellingCalculator,
}

pub fn init_tracing() {
    // Logs go to stderr so they never interleave with the prompts on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true),
        )
        .init();
}

/// Builds the application state and seeds the demo purchase book:
/// 100 shares at $20 (January), 150 at $30 (February), 120 at $10 (March).
pub async fn build_state() -> anyhow::Result<Arc<AppState>> {
    let repository: Arc<dyn PurchaseLotRepositoryTrait> =
        Arc::new(InMemoryPurchaseLotRepository::new());

    let seed_lots = [
        Lot::new(100, dec!(20.0), Month::January),
        Lot::new(150, dec!(30.0), Month::February),
        Lot::new(120, dec!(10.0), Month::March),
    ];
    for lot in seed_lots {
        let lot = lot.context("demo purchase lot is invalid")?;
        repository.append_purchase_lot(lot).await?;
    }

    Ok(Arc::new(AppState {
        purchase_lot_repository: repository,
        selling_calculator: SellingCalculator::new(),
    }))
}
