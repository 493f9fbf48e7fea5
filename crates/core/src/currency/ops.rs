//! `std::ops` wiring for monetary values.
//!
//! Every operator is fallible because it looks up rates, so the output is a
//! `CurrencyResult`. `AddAssign`/`SubAssign` are not implemented for the same
//! reason; use [`MonetaryValue::add_in_place`] and
//! [`MonetaryValue::sub_in_place`].

use std::ops::{Add, Sub};

use super::error::CurrencyResult;
use super::value::MonetaryValue;

impl<'r> Add for MonetaryValue<'r> {
    type Output = CurrencyResult<MonetaryValue<'r>>;

    fn add(self, rhs: Self) -> Self::Output {
        MonetaryValue::add(self, rhs)
    }
}

impl<'r> Sub for MonetaryValue<'r> {
    type Output = CurrencyResult<MonetaryValue<'r>>;

    fn sub(self, rhs: Self) -> Self::Output {
        MonetaryValue::sub(self, rhs)
    }
}

macro_rules! impl_number_ops {
    ($($number:ty),*) => {$(
        impl<'r> Add<$number> for MonetaryValue<'r> {
            type Output = CurrencyResult<MonetaryValue<'r>>;

            fn add(self, rhs: $number) -> Self::Output {
                MonetaryValue::add(self, rhs)
            }
        }

        impl<'r> Sub<$number> for MonetaryValue<'r> {
            type Output = CurrencyResult<MonetaryValue<'r>>;

            fn sub(self, rhs: $number) -> Self::Output {
                MonetaryValue::sub(self, rhs)
            }
        }

        impl<'r> Add<MonetaryValue<'r>> for $number {
            type Output = CurrencyResult<MonetaryValue<'r>>;

            fn add(self, rhs: MonetaryValue<'r>) -> Self::Output {
                rhs.radd(f64::from(self))
            }
        }

        impl<'r> Sub<MonetaryValue<'r>> for $number {
            type Output = CurrencyResult<MonetaryValue<'r>>;

            fn sub(self, rhs: MonetaryValue<'r>) -> Self::Output {
                rhs.rsub(f64::from(self))
            }
        }
    )*};
}

impl_number_ops!(f64, i32);
