//! Currency codes.
//!
//! The set is closed: every code the rate table can price is listed here.

use crate::error::AppError;

/// ISO 4217 currency codes supported by the rate table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    /// Swiss Franc
    Chf,
    /// Canadian Dollar
    Cad,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Euro
    Eur,
    /// US Dollar, the pivot currency
    #[default]
    Usd,
}

impl Currency {
    /// All supported codes, in table order.
    pub const ALL: [Self; 6] = [
        Self::Chf,
        Self::Cad,
        Self::Gbp,
        Self::Jpy,
        Self::Eur,
        Self::Usd,
    ];

    /// Returns the three-letter code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Chf => "CHF",
            Self::Cad => "CAD",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Eur => "EUR",
            Self::Usd => "USD",
        }
    }

    /// Returns true for the pivot currency.
    #[must_use]
    pub const fn is_pivot(self) -> bool {
        matches!(self, Self::Usd)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CHF" => Ok(Self::Chf),
            "CAD" => Ok(Self::Cad),
            "GBP" => Ok(Self::Gbp),
            "JPY" => Ok(Self::Jpy),
            "EUR" => Ok(Self::Eur),
            "USD" => Ok(Self::Usd),
            _ => Err(AppError::UnknownCurrency(s.to_string())),
        }
    }
}
