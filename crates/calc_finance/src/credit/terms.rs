//! General terms of a credit default swap.

use std::fmt;

use calc_core::date::BusinessDayAdjustment;
use calc_core::types::{Currency, Date};

use crate::error::ValidationError;

/// Markit RED code identifying a reference entity or index.
///
/// Six characters for a single-name entity, nine for an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedCode(String);

impl RedCode {
    /// Creates a RED code, rejecting codes that are not 6 or 9
    /// alphanumeric characters.
    pub fn of(code: &str) -> Result<Self, ValidationError> {
        let valid_len = code.len() == 6 || code.len() == 9;
        if !valid_len || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidField {
                field: "red_code",
                reason: format!("'{code}' is not a 6 or 9 character alphanumeric RED code"),
            });
        }
        Ok(Self(code.to_string()))
    }

    /// Returns the code as a string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Seniority of the reference obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeniorityLevel {
    /// Senior unsecured debt.
    SeniorUnsecured,
    /// Subordinated debt.
    Subordinated,
}

/// Restructuring clause governing what counts as a credit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestructuringClause {
    /// No restructuring (XR), the North American standard.
    NoRestructuring,
    /// Modified restructuring (MR).
    ModifiedRestructuring,
    /// Modified-modified restructuring (MM).
    ModModRestructuring,
    /// Full (old) restructuring (CR).
    FullRestructuring,
}

/// Whether protection is bought or sold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuySell {
    /// Buy protection: pay the premium, receive the protection payment.
    Buy,
    /// Sell protection: receive the premium, pay on default.
    Sell,
}

impl BuySell {
    /// Sign of the protection leg from the trade's point of view.
    #[inline]
    pub fn protection_multiplier(&self) -> f64 {
        match self {
            BuySell::Buy => 1.0,
            BuySell::Sell => -1.0,
        }
    }

    /// Sign of the premium (fee) leg from the trade's point of view.
    #[inline]
    pub fn premium_multiplier(&self) -> f64 {
        -self.protection_multiplier()
    }
}

/// What the swap references: a single name or an index.
///
/// The variant determines the product kind used for pricer dispatch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferenceInformation {
    /// A single reference entity.
    SingleName {
        /// The entity's RED code.
        red_code: RedCode,
        /// The legal entity name.
        entity_name: String,
        /// Seniority of the reference obligation.
        seniority: SeniorityLevel,
    },
    /// A credit index such as CDX or iTraxx.
    Index {
        /// The index RED code.
        red_code: RedCode,
        /// The index name, e.g. "CDX.NA.IG.15".
        index_name: String,
        /// The index series.
        series: u32,
        /// The annex version within the series.
        version: u32,
    },
}

impl ReferenceInformation {
    /// Returns the RED code of the reference.
    pub fn red_code(&self) -> &RedCode {
        match self {
            ReferenceInformation::SingleName { red_code, .. } => red_code,
            ReferenceInformation::Index { red_code, .. } => red_code,
        }
    }
}

/// Terms common to the whole swap: dates, adjustment, currency, reference.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneralTerms {
    effective_date: Date,
    scheduled_termination_date: Date,
    date_adjustment: BusinessDayAdjustment,
    currency: Currency,
    reference: ReferenceInformation,
}

impl GeneralTerms {
    /// Creates general terms, rejecting an effective date on or after the
    /// scheduled termination date.
    pub fn of(
        effective_date: Date,
        scheduled_termination_date: Date,
        date_adjustment: BusinessDayAdjustment,
        currency: Currency,
        reference: ReferenceInformation,
    ) -> Result<Self, ValidationError> {
        if effective_date >= scheduled_termination_date {
            return Err(ValidationError::InvalidField {
                field: "effective_date",
                reason: format!(
                    "effective date {effective_date} must precede termination {scheduled_termination_date}"
                ),
            });
        }
        Ok(Self {
            effective_date,
            scheduled_termination_date,
            date_adjustment,
            currency,
            reference,
        })
    }

    /// Returns the protection effective date.
    #[inline]
    pub fn effective_date(&self) -> Date {
        self.effective_date
    }

    /// Returns the scheduled termination (maturity) date.
    #[inline]
    pub fn scheduled_termination_date(&self) -> Date {
        self.scheduled_termination_date
    }

    /// Returns the business-day adjustment for derived dates.
    #[inline]
    pub fn date_adjustment(&self) -> &BusinessDayAdjustment {
        &self.date_adjustment
    }

    /// Returns the swap currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the reference information.
    #[inline]
    pub fn reference(&self) -> &ReferenceInformation {
        &self.reference
    }
}
