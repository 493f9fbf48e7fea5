//! Exchange rate table.
//!
//! Every rate is expressed as units of the currency per 1 USD, so converting
//! between two currencies pivots through USD: divide by the source rate, then
//! multiply by the target rate.

use std::collections::BTreeMap;

use super::error::{CurrencyError, CurrencyResult};
use super::value::MonetaryValue;
use super::Currency;

/// Standard rates, units per 1 USD.
const STANDARD_RATES: [(Currency, f64); 6] = [
    (Currency::Chf, 0.842_935),
    (Currency::Cad, 1.36),
    (Currency::Gbp, 0.76),
    (Currency::Jpy, 142.31),
    (Currency::Eur, 0.90),
    (Currency::Usd, 1.0),
];

/// Immutable mapping from currency to its rate against USD.
///
/// Monetary values borrow the table they are priced against; it is never
/// written after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<Currency, f64>,
}

impl RateTable {
    /// Returns the standard table covering every supported currency.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rates: STANDARD_RATES.into_iter().collect(),
        }
    }

    /// Builds a table from explicit entries.
    ///
    /// Currencies left out are not priced; looking them up fails with
    /// `CurrencyError::UnknownCurrency`. Later entries replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate is not finite and positive, or if USD is
    /// missing or not priced at exactly 1.0.
    pub fn from_entries<I>(entries: I) -> CurrencyResult<Self>
    where
        I: IntoIterator<Item = (Currency, f64)>,
    {
        let table = Self {
            rates: entries.into_iter().collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Builds the standard table with some rates replaced.
    ///
    /// # Errors
    ///
    /// Same as [`RateTable::from_entries`].
    pub fn with_overrides<I>(overrides: I) -> CurrencyResult<Self>
    where
        I: IntoIterator<Item = (Currency, f64)>,
    {
        Self::from_entries(STANDARD_RATES.into_iter().chain(overrides))
    }

    #[allow(clippy::float_cmp)]
    fn validate(&self) -> CurrencyResult<()> {
        for (&currency, &rate) in &self.rates {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(CurrencyError::InvalidRate { currency, rate });
            }
        }

        match self.rates.get(&Currency::Usd) {
            None => Err(CurrencyError::MissingPivot),
            Some(&rate) if rate != 1.0 => Err(CurrencyError::InvalidPivot(rate)),
            Some(_) => Ok(()),
        }
    }

    /// Looks up the rate for a currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if the table has no entry.
    pub fn rate(&self, currency: Currency) -> CurrencyResult<f64> {
        self.rates
            .get(&currency)
            .copied()
            .ok_or(CurrencyError::UnknownCurrency(currency))
    }

    /// Returns true if the table prices this currency.
    #[must_use]
    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Iterates over `(currency, rate)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(&currency, &rate)| (currency, rate))
    }

    /// Number of priced currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if no currency is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Creates a monetary value priced against this table.
    #[must_use]
    pub const fn value(&self, amount: f64, unit: Currency) -> MonetaryValue<'_> {
        MonetaryValue::new(amount, unit, self)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::standard()
    }
}
