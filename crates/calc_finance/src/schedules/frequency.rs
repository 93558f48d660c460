//! Payment frequency and stub conventions.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Payment frequency for scheduled instruments.
///
/// # Examples
///
/// ```
/// use calc_finance::schedules::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.months_per_period(), 3);
/// assert_eq!(freq.periods_per_year(), 4);
/// assert_eq!(freq.to_string(), "P3M");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// Annual payments.
    Annual,
    /// Semi-annual payments.
    SemiAnnual,
    /// Quarterly payments.
    Quarterly,
    /// Monthly payments.
    Monthly,
}

impl Frequency {
    /// Returns the number of months in one period.
    #[inline]
    pub fn months_per_period(&self) -> i32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
        }
    }

    /// Returns the number of payment periods per year.
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        (12 / self.months_per_period()) as u32
    }

    /// Returns the period code, such as `P3M` for quarterly.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Frequency::Annual => "P12M",
            Frequency::SemiAnnual => "P6M",
            Frequency::Quarterly => "P3M",
            Frequency::Monthly => "P1M",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Frequency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P12M" | "P1Y" | "ANNUAL" => Ok(Frequency::Annual),
            "P6M" | "SEMIANNUAL" => Ok(Frequency::SemiAnnual),
            "P3M" | "QUARTERLY" => Ok(Frequency::Quarterly),
            "P1M" | "MONTHLY" => Ok(Frequency::Monthly),
            _ => Err(ValidationError::InvalidField {
                field: "frequency",
                reason: format!("unknown frequency '{s}'"),
            }),
        }
    }
}

/// Where to place a stub when the date range does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StubConvention {
    /// No stub permitted; an uneven range is a schedule error.
    None,
    /// A short first period absorbs the remainder.
    ShortInitial,
    /// A short last period absorbs the remainder.
    #[default]
    ShortFinal,
}
