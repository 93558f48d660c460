//! Monetary amounts paired with a currency.

use std::fmt;
use std::ops::Neg;

use super::currency::Currency;
use super::error::CurrencyError;

/// An amount of money in a single currency.
///
/// Arithmetic across different currencies is an error rather than a silent
/// conversion; conversion requires an explicit FX rate.
///
/// # Examples
///
/// ```
/// use calc_core::types::{Currency, CurrencyAmount};
///
/// let a = CurrencyAmount::of(Currency::USD, 1_000.0);
/// let b = CurrencyAmount::of(Currency::USD, 250.0);
///
/// let sum = a.plus(b).unwrap();
/// assert_eq!(sum.amount(), 1_250.0);
///
/// let gbp = CurrencyAmount::of(Currency::GBP, 1.0);
/// assert!(a.plus(gbp).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrencyAmount {
    currency: Currency,
    amount: f64,
}

impl CurrencyAmount {
    /// Creates an amount in the given currency.
    #[inline]
    pub fn of(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }

    /// Creates a zero amount in the given currency.
    #[inline]
    pub fn zero(currency: Currency) -> Self {
        Self {
            currency,
            amount: 0.0,
        }
    }

    /// Returns the currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the numeric amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Adds another amount in the same currency.
    ///
    /// Returns `CurrencyError::CurrencyMismatch` when the currencies differ.
    pub fn plus(&self, other: CurrencyAmount) -> Result<CurrencyAmount, CurrencyError> {
        if self.currency != other.currency {
            return Err(CurrencyError::CurrencyMismatch {
                left: self.currency.code(),
                right: other.currency.code(),
            });
        }
        Ok(CurrencyAmount::of(self.currency, self.amount + other.amount))
    }

    /// Returns this amount scaled by a factor.
    #[inline]
    pub fn multiplied_by(&self, factor: f64) -> CurrencyAmount {
        CurrencyAmount::of(self.currency, self.amount * factor)
    }

    /// Converts this amount into another currency at the given FX rate.
    ///
    /// The rate is the number of units of `target` per unit of this
    /// currency. Converting into the same currency ignores the rate.
    pub fn converted_to(&self, target: Currency, fx_rate: f64) -> CurrencyAmount {
        if self.currency == target {
            *self
        } else {
            CurrencyAmount::of(target, self.amount * fx_rate)
        }
    }
}

impl Neg for CurrencyAmount {
    type Output = CurrencyAmount;

    fn neg(self) -> CurrencyAmount {
        CurrencyAmount::of(self.currency, -self.amount)
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.*}",
            self.currency,
            self.currency.decimal_places() as usize,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_same_currency() {
        let a = CurrencyAmount::of(Currency::EUR, 10.5);
        let b = CurrencyAmount::of(Currency::EUR, -3.0);
        assert_eq!(a.plus(b).unwrap().amount(), 7.5);
    }

    #[test]
    fn test_plus_mismatch_fails() {
        let a = CurrencyAmount::of(Currency::EUR, 10.0);
        let b = CurrencyAmount::of(Currency::USD, 10.0);
        assert!(matches!(
            a.plus(b),
            Err(CurrencyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_converted_to_same_currency_ignores_rate() {
        let a = CurrencyAmount::of(Currency::USD, 5.0);
        assert_eq!(a.converted_to(Currency::USD, 123.0), a);
    }

    #[test]
    fn test_display_uses_decimal_places() {
        assert_eq!(
            CurrencyAmount::of(Currency::USD, 1234.567).to_string(),
            "USD 1234.57"
        );
        assert_eq!(
            CurrencyAmount::of(Currency::JPY, 1234.567).to_string(),
            "JPY 1235"
        );
    }
}
