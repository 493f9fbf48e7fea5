//! Monetary values and their arithmetic.
//!
//! A plain number combined with a monetary value is read as a USD amount.
//! The result of `add`/`sub` keeps the unit of the left operand, while the
//! reversed forms (`number + value`, `number - value`) always end up in USD.

use std::fmt;

use super::error::CurrencyResult;
use super::rates::RateTable;
use super::Currency;

/// An amount tagged with a currency unit, priced against a rate table.
///
/// `Debug` and `Display` render the same `"<amount> <unit>"` text.
#[derive(Clone, Copy)]
pub struct MonetaryValue<'r> {
    amount: f64,
    unit: Currency,
    rates: &'r RateTable,
}

/// Right-hand side of an addition or subtraction.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'r> {
    /// A plain number, read as USD.
    Number(f64),
    /// Another monetary value, converted into the receiver's unit.
    Value(MonetaryValue<'r>),
}

impl From<f64> for Operand<'_> {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for Operand<'_> {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl<'r> From<MonetaryValue<'r>> for Operand<'r> {
    fn from(value: MonetaryValue<'r>) -> Self {
        Self::Value(value)
    }
}

impl<'r> MonetaryValue<'r> {
    /// Creates a new value. The unit is not checked against the table until
    /// the first lookup.
    #[must_use]
    pub const fn new(amount: f64, unit: Currency, rates: &'r RateTable) -> Self {
        Self {
            amount,
            unit,
            rates,
        }
    }

    /// Creates a value in the default unit, USD.
    #[must_use]
    pub const fn usd(amount: f64, rates: &'r RateTable) -> Self {
        Self::new(amount, Currency::Usd, rates)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency unit.
    #[must_use]
    pub const fn unit(&self) -> Currency {
        self.unit
    }

    /// Returns the table this value is priced against.
    #[must_use]
    pub const fn rates(&self) -> &'r RateTable {
        self.rates
    }

    /// Converts this value to another unit in place.
    ///
    /// `amount = amount / rate[unit] * rate[new_unit]`. Left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if either unit is missing from
    /// the rate table.
    pub fn convert_to(&mut self, new_unit: Currency) -> CurrencyResult<()> {
        let from = self.rates.rate(self.unit)?;
        let to = self.rates.rate(new_unit)?;
        self.amount = self.amount / from * to;
        self.unit = new_unit;
        Ok(())
    }

    /// Returns a copy of this value converted to another unit.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryValue::convert_to`].
    pub fn converted_to(mut self, new_unit: Currency) -> CurrencyResult<Self> {
        self.convert_to(new_unit)?;
        Ok(self)
    }

    /// Expresses `other` in this value's unit.
    fn delta(&self, other: Operand<'_>) -> CurrencyResult<f64> {
        let own_rate = self.rates.rate(self.unit)?;
        match other {
            Operand::Number(usd) => Ok(usd * own_rate),
            Operand::Value(value) => Ok(value.amount / self.rates.rate(value.unit)? * own_rate),
        }
    }

    /// Adds a number (as USD) or another value; the result keeps this unit.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if a unit involved is missing
    /// from the rate table.
    pub fn add(self, other: impl Into<Operand<'r>>) -> CurrencyResult<Self> {
        let delta = self.delta(other.into())?;
        Ok(Self::new(self.amount + delta, self.unit, self.rates))
    }

    /// Subtracts a number (as USD) or another value; the result keeps this unit.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryValue::add`].
    pub fn sub(self, other: impl Into<Operand<'r>>) -> CurrencyResult<Self> {
        let delta = self.delta(other.into())?;
        Ok(Self::new(self.amount - delta, self.unit, self.rates))
    }

    /// `self += other`: rebinds this value to `self.add(other)`.
    ///
    /// Copies taken before the call keep their old amount. On error the
    /// receiver is left unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryValue::add`].
    pub fn add_in_place(&mut self, other: impl Into<Operand<'r>>) -> CurrencyResult<()> {
        *self = self.add(other)?;
        Ok(())
    }

    /// `self -= other`: rebinds this value to `self.sub(other)`.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryValue::add`].
    pub fn sub_in_place(&mut self, other: impl Into<Operand<'r>>) -> CurrencyResult<()> {
        *self = self.sub(other)?;
        Ok(())
    }

    /// `other + self`, with `other` read as USD.
    ///
    /// Unlike [`MonetaryValue::add`], the result is always in USD.
    ///
    /// # Errors
    ///
    /// Same as [`MonetaryValue::add`].
    pub fn radd(self, other: f64) -> CurrencyResult<Self> {
        let sum = self.add(other)?;
        sum.into_pivot()
    }

    /// `other - self`, with the result always in USD.
    ///
    /// `other` is subtracted from as a raw number in this value's unit; it is
    /// not rescaled by any rate.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if this unit is missing from
    /// the rate table and is not USD.
    pub fn rsub(self, other: f64) -> CurrencyResult<Self> {
        let difference = Self::new(other - self.amount, self.unit, self.rates);
        difference.into_pivot()
    }

    fn into_pivot(self) -> CurrencyResult<Self> {
        if self.unit.is_pivot() {
            Ok(self)
        } else {
            self.converted_to(Currency::Usd)
        }
    }
}

impl fmt::Display for MonetaryValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.unit)
    }
}

impl fmt::Debug for MonetaryValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
