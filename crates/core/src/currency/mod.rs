//! Multi-currency handling and exchange rates.

pub mod error;
pub mod rates;
pub mod value;

mod ops;

#[cfg(test)]
mod props;

pub use cambio_shared::Currency;
pub use error::{CurrencyError, CurrencyResult};
pub use rates::RateTable;
pub use value::{MonetaryValue, Operand};
