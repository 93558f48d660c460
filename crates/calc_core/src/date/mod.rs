//! Holiday calendars and business-day adjustment.
//!
//! Date derivation in the upper layers is parameterised by values from this
//! module: a [`HolidayCalendar`] says which days are tradeable, a
//! [`BusinessDayConvention`] says how to move a date that is not, and
//! [`BusinessDayAdjustment`] / [`DaysAdjustment`] bundle the two with offsets
//! so that conventions and schedules can carry them as plain data.

pub mod adjust;
pub mod calendar;

pub use adjust::{BusinessDayAdjustment, BusinessDayConvention, DaysAdjustment};
pub use calendar::HolidayCalendar;
