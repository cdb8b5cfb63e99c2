mod config;
mod console;
mod main_lib;

use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state().await?;
    tracing::debug!(
        "Demo purchase book seeded; trade month is {}.",
        config.trade_month.name()
    );
    console::run_session(&state, &config).await
}
