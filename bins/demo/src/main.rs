//! Cambio demo
//!
//! Prices two values against the rate table, combines them with every
//! operator and prints each result on its own line.
//!
//! The expected output (`40.39 EUR` through `10.03 USD`) assumes the standard
//! table; rate overrides from configuration (`CAMBIO__RATES__*`) change it.

use anyhow::Context;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use cambio_core::currency::{Currency, CurrencyResult, MonetaryValue, RateTable};
use cambio_shared::AppConfig;
use cambio_shared::config::LoggingConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let overrides = config.rate_overrides()?;
    if !overrides.is_empty() {
        info!(count = overrides.len(), "Applying configured rate overrides");
    }
    let rates = RateTable::with_overrides(overrides)?;
    for (currency, rate) in rates.iter() {
        debug!(%currency, rate, "Rate loaded");
    }

    let lines = scenario(&rates).inspect_err(|err| error!(%err, "Scenario failed"))?;
    for line in &lines {
        println!("{line}");
    }

    info!(results = lines.len(), "Done");
    Ok(())
}

/// Logs go to stderr so stdout carries only the results.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

/// Renders, in order: `v1 + v2`, `v2 + v1`, `v1 + 3`, `3 + v1`, `v1 - 3`
/// and `30 - v2`. A plain number counts as USD.
fn scenario(rates: &RateTable) -> CurrencyResult<Vec<String>> {
    let v1 = MonetaryValue::new(22.42, Currency::Eur, rates);
    let v2 = MonetaryValue::new(19.97, Currency::Usd, rates);

    let results = [
        (v1 + v2)?,
        (v2 + v1)?,
        (v1 + 3)?,
        (3 + v1)?,
        (v1 - 3)?,
        (30 - v2)?,
    ];

    Ok(results.iter().map(ToString::to_string).collect())
}
