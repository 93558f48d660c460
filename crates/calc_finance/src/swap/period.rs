//! Payment periods: the atomic units a pricer operates on.
//!
//! Periods are produced by product expansion and never constructed directly
//! by calculation code. The enum tag on [`PaymentPeriod`] and
//! [`RateObservation`] is what the pricing dispatch layer keys its
//! registries on.

use calc_core::types::{Currency, CurrencyAmount, Date};

use super::index::IborIndex;

/// Tag identifying the concrete variant of a [`PaymentPeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentPeriodKind {
    /// A period accruing interest at an observed rate.
    RatePayment,
    /// A known cash amount paid on a date.
    KnownAmount,
}

impl PaymentPeriodKind {
    /// Returns the type name used in diagnostics.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            PaymentPeriodKind::RatePayment => "RatePaymentPeriod",
            PaymentPeriodKind::KnownAmount => "KnownAmountPaymentPeriod",
        }
    }
}

/// Tag identifying the concrete variant of a [`RateObservation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateObservationKind {
    /// A fixed contractual rate.
    Fixed,
    /// A rate observed from an Ibor index fixing.
    Ibor,
}

impl RateObservationKind {
    /// Returns the type name used in diagnostics.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            RateObservationKind::Fixed => "FixedRateObservation",
            RateObservationKind::Ibor => "IborRateObservation",
        }
    }
}

/// How the accrual rate of a period is determined.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RateObservation {
    /// The rate is fixed in the contract.
    Fixed {
        /// The annualised fixed rate.
        rate: f64,
    },
    /// The rate is observed from an index fixing.
    Ibor {
        /// The index observed.
        index: IborIndex,
        /// The date the fixing is observed.
        fixing_date: Date,
    },
}

impl RateObservation {
    /// Returns the variant tag.
    #[inline]
    pub fn kind(&self) -> RateObservationKind {
        match self {
            RateObservation::Fixed { .. } => RateObservationKind::Fixed,
            RateObservation::Ibor { .. } => RateObservationKind::Ibor,
        }
    }
}

/// A period accruing interest at an observed rate on a notional.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatePaymentPeriod {
    start: Date,
    end: Date,
    payment_date: Date,
    year_fraction: f64,
    notional: f64,
    currency: Currency,
    observation: RateObservation,
}

impl RatePaymentPeriod {
    /// Creates a rate payment period.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start: Date,
        end: Date,
        payment_date: Date,
        year_fraction: f64,
        notional: f64,
        currency: Currency,
        observation: RateObservation,
    ) -> Self {
        Self {
            start,
            end,
            payment_date,
            year_fraction,
            notional,
            currency,
            observation,
        }
    }

    /// Returns the accrual start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the accrual end date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the accrual year fraction.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }

    /// Returns the notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the payment currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns how the accrual rate is observed.
    #[inline]
    pub fn observation(&self) -> &RateObservation {
        &self.observation
    }
}

/// A known cash amount paid on a date, such as a fee or notional exchange.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnownAmountPaymentPeriod {
    payment_date: Date,
    amount: CurrencyAmount,
}

impl KnownAmountPaymentPeriod {
    /// Creates a known-amount period.
    pub fn new(payment_date: Date, amount: CurrencyAmount) -> Self {
        Self {
            payment_date,
            amount,
        }
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the amount paid.
    #[inline]
    pub fn amount(&self) -> CurrencyAmount {
        self.amount
    }
}

/// The atomic unit of swap pricing: one payment owed on one date.
///
/// A closed variant set; the pricing layer routes each variant to the
/// pricer registered for its [`kind`](PaymentPeriod::kind) tag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentPeriod {
    /// A period accruing at an observed rate.
    Rate(RatePaymentPeriod),
    /// A known amount paid on a date.
    KnownAmount(KnownAmountPaymentPeriod),
}

impl PaymentPeriod {
    /// Returns the variant tag used for pricer dispatch.
    #[inline]
    pub fn kind(&self) -> PaymentPeriodKind {
        match self {
            PaymentPeriod::Rate(_) => PaymentPeriodKind::RatePayment,
            PaymentPeriod::KnownAmount(_) => PaymentPeriodKind::KnownAmount,
        }
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment_date(&self) -> Date {
        match self {
            PaymentPeriod::Rate(p) => p.payment_date(),
            PaymentPeriod::KnownAmount(p) => p.payment_date(),
        }
    }

    /// Returns the payment currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        match self {
            PaymentPeriod::Rate(p) => p.currency(),
            PaymentPeriod::KnownAmount(p) => p.amount().currency(),
        }
    }
}
