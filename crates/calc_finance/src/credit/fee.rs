//! Fee leg and protection terms.

use calc_core::date::DaysAdjustment;
use calc_core::types::DayCount;

use crate::error::ValidationError;
use crate::schedules::{Frequency, StubConvention};

/// The periodic premium leg of a credit default swap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeLeg {
    notional: f64,
    coupon: f64,
    pay_accrued_on_default: bool,
    day_count: DayCount,
    payment_frequency: Frequency,
    stub_convention: StubConvention,
    payment_offset: DaysAdjustment,
}

impl FeeLeg {
    /// Creates a fee leg, validating the notional and coupon.
    #[allow(clippy::too_many_arguments)]
    pub fn of(
        notional: f64,
        coupon: f64,
        pay_accrued_on_default: bool,
        day_count: DayCount,
        payment_frequency: Frequency,
        stub_convention: StubConvention,
        payment_offset: DaysAdjustment,
    ) -> Result<Self, ValidationError> {
        if !notional.is_finite() || notional <= 0.0 {
            return Err(ValidationError::InvalidField {
                field: "notional",
                reason: format!("notional must be positive and finite, got {notional}"),
            });
        }
        if !coupon.is_finite() || coupon < 0.0 {
            return Err(ValidationError::InvalidField {
                field: "coupon",
                reason: format!("coupon must be non-negative and finite, got {coupon}"),
            });
        }
        Ok(Self {
            notional,
            coupon,
            pay_accrued_on_default,
            day_count,
            payment_frequency,
            stub_convention,
            payment_offset,
        })
    }

    /// Returns the fee leg notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the annualised coupon, e.g. 0.01 for 100bp.
    #[inline]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Returns whether accrued premium is paid on default.
    #[inline]
    pub fn pay_accrued_on_default(&self) -> bool {
        self.pay_accrued_on_default
    }

    /// Returns the accrual day count.
    #[inline]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the premium payment frequency.
    #[inline]
    pub fn payment_frequency(&self) -> Frequency {
        self.payment_frequency
    }

    /// Returns the stub convention.
    #[inline]
    pub fn stub_convention(&self) -> StubConvention {
        self.stub_convention
    }

    /// Returns the payment date offset from each accrual end.
    #[inline]
    pub fn payment_offset(&self) -> &DaysAdjustment {
        &self.payment_offset
    }
}

/// The contingent protection leg of a credit default swap.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProtectionTerms {
    notional: f64,
    restructuring_clause: super::terms::RestructuringClause,
}

impl ProtectionTerms {
    /// Creates protection terms, validating the notional.
    pub fn of(
        notional: f64,
        restructuring_clause: super::terms::RestructuringClause,
    ) -> Result<Self, ValidationError> {
        if !notional.is_finite() || notional <= 0.0 {
            return Err(ValidationError::InvalidField {
                field: "notional",
                reason: format!("notional must be positive and finite, got {notional}"),
            });
        }
        Ok(Self {
            notional,
            restructuring_clause,
        })
    }

    /// Returns the protected notional.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the restructuring clause.
    #[inline]
    pub fn restructuring_clause(&self) -> super::terms::RestructuringClause {
        self.restructuring_clause
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credit::terms::RestructuringClause;

    #[test]
    fn test_fee_leg_validation() {
        let result = FeeLeg::of(
            -1.0,
            0.01,
            true,
            DayCount::Act360,
            Frequency::Quarterly,
            StubConvention::ShortFinal,
            DaysAdjustment::of_calendar_days(0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_protection_terms_validation() {
        assert!(ProtectionTerms::of(0.0, RestructuringClause::NoRestructuring).is_err());
        assert!(ProtectionTerms::of(1_000_000.0, RestructuringClause::NoRestructuring).is_ok());
    }
}
