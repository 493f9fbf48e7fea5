//! Property-based tests for monetary values.
//!
//! - Conversion round trip
//! - Additive identity and same-unit addition
//! - Reversed operator normalization

use proptest::prelude::*;

use super::{Currency, MonetaryValue, RateTable};

/// Strategy to generate any supported currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(Currency::ALL.to_vec())
}

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00), zero and
/// negatives included.
fn amount() -> impl Strategy<Value = f64> {
    (-100_000_000i32..=100_000_000i32).prop_map(|cents| f64::from(cents) / 100.0)
}

/// Relative comparison with an absolute floor for values near zero.
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()) + 1e-6
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Converting A -> B -> A returns the original amount.
    #[test]
    fn prop_conversion_round_trip(
        x in amount(),
        from in currency(),
        to in currency(),
    ) {
        let rates = RateTable::standard();
        let mut value = MonetaryValue::new(x, from, &rates);
        value.convert_to(to).unwrap();
        prop_assert_eq!(value.unit(), to);
        value.convert_to(from).unwrap();
        prop_assert_eq!(value.unit(), from);
        prop_assert!(approx_eq(value.amount(), x), "{} != {}", value.amount(), x);
    }

    /// Converting to the same unit keeps the amount.
    #[test]
    fn prop_same_unit_conversion_is_identity(x in amount(), unit in currency()) {
        let rates = RateTable::standard();
        let value = MonetaryValue::new(x, unit, &rates).converted_to(unit).unwrap();
        prop_assert!(approx_eq(value.amount(), x));
    }

    /// Adding plain zero is the identity.
    #[test]
    fn prop_add_zero_is_identity(x in amount(), unit in currency()) {
        let rates = RateTable::standard();
        let sum = MonetaryValue::new(x, unit, &rates).add(0.0).unwrap();
        prop_assert_eq!(sum.unit(), unit);
        prop_assert!(approx_eq(sum.amount(), x));
    }

    /// Same-unit addition adds the raw amounts.
    #[test]
    fn prop_same_unit_add(v in amount(), w in amount(), unit in currency()) {
        let rates = RateTable::standard();
        let sum = MonetaryValue::new(v, unit, &rates)
            .add(MonetaryValue::new(w, unit, &rates))
            .unwrap();
        prop_assert_eq!(sum.unit(), unit);
        prop_assert!(approx_eq(sum.amount(), v + w));
    }

    /// `v + n` keeps v's unit; `n + v` is the same sum expressed in USD.
    #[test]
    fn prop_reversed_add_normalizes_to_usd(
        x in amount(),
        n in amount(),
        unit in currency(),
    ) {
        let rates = RateTable::standard();
        let value = MonetaryValue::new(x, unit, &rates);

        let forward = value.add(n).unwrap();
        let reversed = value.radd(n).unwrap();
        prop_assert_eq!(forward.unit(), unit);
        prop_assert_eq!(reversed.unit(), Currency::Usd);

        let expected = forward.converted_to(Currency::Usd).unwrap();
        prop_assert!(approx_eq(reversed.amount(), expected.amount()));
    }

    /// `n - v` subtracts the raw amount, then converts to USD.
    #[test]
    fn prop_reversed_sub_ignores_rate(
        x in amount(),
        n in amount(),
        unit in currency(),
    ) {
        let rates = RateTable::standard();
        let value = MonetaryValue::new(x, unit, &rates);

        let reversed = value.rsub(n).unwrap();
        prop_assert_eq!(reversed.unit(), Currency::Usd);

        let expected = n - x;
        let rate = rates.rate(unit).unwrap();
        prop_assert!(approx_eq(reversed.amount() * rate, expected));
    }

    /// Subtracting what was added restores the amount.
    #[test]
    fn prop_add_then_sub(x in amount(), y in amount(), a in currency(), b in currency()) {
        let rates = RateTable::standard();
        let value = MonetaryValue::new(x, a, &rates);
        let other = MonetaryValue::new(y, b, &rates);
        let restored = value.add(other).unwrap().sub(other).unwrap();
        prop_assert_eq!(restored.unit(), a);
        prop_assert!(approx_eq(restored.amount(), x));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::currency::CurrencyError;

    #[test]
    fn test_unknown_currency_never_defaults() {
        let rates = RateTable::from_entries([(Currency::Usd, 1.0)]).unwrap();
        for unit in Currency::ALL.into_iter().filter(|c| !c.is_pivot()) {
            let mut value = MonetaryValue::usd(1.0, &rates);
            assert_eq!(
                value.convert_to(unit),
                Err(CurrencyError::UnknownCurrency(unit))
            );
            assert_eq!(value.unit(), Currency::Usd);
        }
    }

    #[test]
    fn test_asymmetry_example() {
        let rates = RateTable::standard();
        let v = MonetaryValue::new(10.0, Currency::Eur, &rates);
        assert_eq!((v + 5).unwrap().unit(), Currency::Eur);
        assert_eq!((5 + v).unwrap().unit(), Currency::Usd);
    }
}
