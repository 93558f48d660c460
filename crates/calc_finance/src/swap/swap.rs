//! The swap product and its expanded form.

use calc_core::types::{Currency, Date};

use super::leg::{PayReceive, SwapLeg};
use super::period::PaymentPeriod;
use crate::error::ValidationError;
use crate::schedules::ScheduleError;

/// An interest rate swap: two or more legs exchanging cashflows.
///
/// A pure value object; identity is structural equality. Expansion with
/// [`Swap::expand`] materialises every leg's payment periods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Swap {
    legs: Vec<SwapLeg>,
}

impl Swap {
    /// Creates a swap from its legs, rejecting an empty list.
    pub fn of(legs: Vec<SwapLeg>) -> Result<Self, ValidationError> {
        if legs.is_empty() {
            return Err(ValidationError::MissingField { field: "legs" });
        }
        Ok(Self { legs })
    }

    /// Returns the legs.
    #[inline]
    pub fn legs(&self) -> &[SwapLeg] {
        &self.legs
    }

    /// Returns the leg with the given direction, if present.
    pub fn leg(&self, pay_receive: PayReceive) -> Option<&SwapLeg> {
        self.legs.iter().find(|l| l.pay_receive() == pay_receive)
    }

    /// Expands the swap into its fully dated form.
    pub fn expand(&self) -> Result<ExpandedSwap, ScheduleError> {
        let legs = self
            .legs
            .iter()
            .map(|leg| {
                Ok(ExpandedSwapLeg {
                    pay_receive: leg.pay_receive(),
                    currency: leg.notional().currency(),
                    notional: leg.notional().amount(),
                    periods: leg.expand()?,
                })
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;
        Ok(ExpandedSwap { legs })
    }
}

/// A swap leg with all payment periods materialised.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandedSwapLeg {
    pay_receive: PayReceive,
    currency: Currency,
    notional: f64,
    periods: Vec<PaymentPeriod>,
}

impl ExpandedSwapLeg {
    /// Returns whether the leg is paid or received.
    #[inline]
    pub fn pay_receive(&self) -> PayReceive {
        self.pay_receive
    }

    /// Returns the leg currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the leg notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the payment periods in date order.
    #[inline]
    pub fn periods(&self) -> &[PaymentPeriod] {
        &self.periods
    }

    /// Returns the final payment date of the leg.
    pub fn maturity_date(&self) -> Option<Date> {
        self.periods.iter().map(|p| p.payment_date()).max()
    }
}

/// A swap with every leg expanded into payment periods.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpandedSwap {
    legs: Vec<ExpandedSwapLeg>,
}

impl ExpandedSwap {
    /// Returns the expanded legs.
    #[inline]
    pub fn legs(&self) -> &[ExpandedSwapLeg] {
        &self.legs
    }

    /// Returns the expanded leg with the given direction, if present.
    pub fn leg(&self, pay_receive: PayReceive) -> Option<&ExpandedSwapLeg> {
        self.legs.iter().find(|l| l.pay_receive() == pay_receive)
    }

    /// Returns the latest payment date across all legs.
    pub fn maturity_date(&self) -> Option<Date> {
        self.legs.iter().filter_map(|l| l.maturity_date()).max()
    }

    /// Returns the notional of the first leg.
    ///
    /// Measures report a single headline notional; by convention this is
    /// the first leg's.
    pub fn notional(&self) -> Option<f64> {
        self.legs.first().map(|l| l.notional())
    }

    /// Returns the currency of the first leg.
    pub fn currency(&self) -> Option<Currency> {
        self.legs.first().map(|l| l.currency())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_fixtures::vanilla_usd_swap;
    use super::*;
    use calc_core::types::Date;

    #[test]
    fn test_swap_requires_legs() {
        assert!(matches!(
            Swap::of(vec![]),
            Err(ValidationError::MissingField { field: "legs" })
        ));
    }

    #[test]
    fn test_expand_materialises_both_legs() {
        let expanded = vanilla_usd_swap().expand().unwrap();
        assert_eq!(expanded.legs().len(), 2);
        assert!(expanded.leg(PayReceive::Pay).is_some());
        assert!(expanded.leg(PayReceive::Receive).is_some());
        assert_eq!(expanded.notional(), Some(12_000_000.0));
    }

    #[test]
    fn test_maturity_is_latest_payment() {
        let expanded = vanilla_usd_swap().expand().unwrap();
        let maturity = expanded.maturity_date().unwrap();
        assert!(maturity >= Date::from_ymd(2011, 2, 24).unwrap());
    }

    #[test]
    fn test_expand_is_deterministic() {
        let swap = vanilla_usd_swap();
        assert_eq!(swap.expand().unwrap(), swap.expand().unwrap());
    }
}
