//! Application configuration management.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rates (units per 1 USD) replacing entries of the standard table.
    pub rates: BTreeMap<String, f64>,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "cambio=info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CAMBIO").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Parses the configured rate overrides into typed currency codes.
    ///
    /// # Errors
    ///
    /// Returns `AppError::UnknownCurrency` for a code outside the supported set.
    pub fn rate_overrides(&self) -> AppResult<Vec<(Currency, f64)>> {
        self.rates
            .iter()
            .map(|(code, rate)| Ok((Currency::from_str(code)?, *rate)))
            .collect()
    }
}
