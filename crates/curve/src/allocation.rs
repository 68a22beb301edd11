//! Daily allocation value type.

use chrono::NaiveDate;
use serde::Serialize;

/// One day's production target within a computed curve.
///
/// Immutable once produced. `date` serializes as ISO `YYYY-MM-DD`, matching
/// the calendar-day granularity of the model; `target_units` is always
/// rounded to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyAllocation {
    day: u32,
    date: NaiveDate,
    target_units: f64,
}

impl DailyAllocation {
    pub(crate) fn new(day: u32, date: NaiveDate, target_units: f64) -> Self {
        Self {
            day,
            date,
            target_units,
        }
    }

    /// Returns the 1-based sequence index within the duration.
    pub fn day(self) -> u32 {
        self.day
    }

    /// Returns the calendar date, `start_date + (day - 1)` days.
    pub fn date(self) -> NaiveDate {
        self.date
    }

    /// Returns the target unit count for this day, rounded to 2 decimals.
    pub fn target_units(self) -> f64 {
        self.target_units
    }
}
