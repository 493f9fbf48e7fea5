//! Currency error types.

use thiserror::Error;

use super::Currency;

/// Result type alias using `CurrencyError`.
pub type CurrencyResult<T> = Result<T, CurrencyError>;

/// Currency-related errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurrencyError {
    /// The rate table has no entry for this currency.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(Currency),

    /// A rate is not a finite positive number.
    #[error("Invalid rate for {currency}: {rate}")]
    InvalidRate {
        /// Currency the rate was given for.
        currency: Currency,
        /// Rejected rate.
        rate: f64,
    },

    /// The rate table has no entry for the pivot currency.
    #[error("Rate table has no USD entry")]
    MissingPivot,

    /// The pivot currency is not priced at exactly 1.0.
    #[error("USD rate must be 1.0, got {0}")]
    InvalidPivot(f64),
}
