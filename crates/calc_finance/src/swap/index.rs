//! Ibor benchmark indices.

use std::fmt;

use calc_core::date::HolidayCalendar;
use calc_core::types::{Currency, Date};

/// An Ibor-style term benchmark index.
///
/// # Examples
///
/// ```
/// use calc_finance::swap::IborIndex;
/// use calc_core::types::Currency;
///
/// let index = IborIndex::UsdLibor3M;
/// assert_eq!(index.name(), "USD-LIBOR-3M");
/// assert_eq!(index.currency(), Currency::USD);
/// assert_eq!(index.tenor_months(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IborIndex {
    /// US Dollar LIBOR, 3 month tenor.
    UsdLibor3M,
    /// US Dollar LIBOR, 6 month tenor.
    UsdLibor6M,
    /// Euro Interbank Offered Rate, 3 month tenor.
    Euribor3M,
    /// Euro Interbank Offered Rate, 6 month tenor.
    Euribor6M,
}

impl IborIndex {
    /// Returns the standard market name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            IborIndex::UsdLibor3M => "USD-LIBOR-3M",
            IborIndex::UsdLibor6M => "USD-LIBOR-6M",
            IborIndex::Euribor3M => "EURIBOR-3M",
            IborIndex::Euribor6M => "EURIBOR-6M",
        }
    }

    /// Returns the currency of the index.
    #[inline]
    pub fn currency(&self) -> Currency {
        match self {
            IborIndex::UsdLibor3M | IborIndex::UsdLibor6M => Currency::USD,
            IborIndex::Euribor3M | IborIndex::Euribor6M => Currency::EUR,
        }
    }

    /// Returns the tenor in months.
    #[inline]
    pub fn tenor_months(&self) -> u32 {
        match self {
            IborIndex::UsdLibor3M | IborIndex::Euribor3M => 3,
            IborIndex::UsdLibor6M | IborIndex::Euribor6M => 6,
        }
    }

    /// Returns the calendar governing fixing dates.
    pub fn fixing_calendar(&self) -> HolidayCalendar {
        match self {
            IborIndex::UsdLibor3M | IborIndex::UsdLibor6M => HolidayCalendar::Gblo,
            IborIndex::Euribor3M | IborIndex::Euribor6M => HolidayCalendar::SatSun,
        }
    }

    /// Returns the fixing date for a period starting on the given date.
    ///
    /// Fixings are observed two business days before the accrual start,
    /// under the fixing calendar.
    pub fn fixing_date_for(&self, accrual_start: Date) -> Date {
        self.fixing_calendar().shift(accrual_start, -2)
    }
}

impl fmt::Display for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
