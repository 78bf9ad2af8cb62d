use chrono::{Datelike, NaiveDate, Weekday};

use crate::prelude::*;

/// Daylight-saving period of a single calendar year.
///
/// Computed from weekday arithmetic alone, so no per-year table needs maintaining.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DaylightSaving {
    /// Second Sunday of March, inclusive.
    pub start: NaiveDate,

    /// First Sunday of November, exclusive.
    pub end: NaiveDate,
}

impl DaylightSaving {
    pub fn try_for_year(year: i32) -> Result<Self> {
        let march_1 = NaiveDate::from_ymd_opt(year, 3, 1)
            .with_context(|| format!("year {year} is out of range"))?;
        let november_1 = NaiveDate::from_ymd_opt(year, 11, 1)
            .with_context(|| format!("year {year} is out of range"))?;
        Ok(Self { start: nth_sunday_since(march_1, 2)?, end: nth_sunday_since(november_1, 1)? })
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start <= date) && (date < self.end)
    }
}

/// Tell whether the date falls within the daylight-saving period of its own year.
///
/// Dates for which chrono cannot build the year's window are treated as standard time.
#[must_use]
pub fn is_daylight_saving(date: NaiveDate) -> bool {
    DaylightSaving::try_for_year(date.year()).is_ok_and(|period| period.contains(date))
}

/// Walk forward day by day from `since` (inclusive) until the `n`-th Sunday.
fn nth_sunday_since(since: NaiveDate, n: usize) -> Result<NaiveDate> {
    since
        .iter_days()
        .filter(|date| date.weekday() == Weekday::Sun)
        .nth(n - 1)
        .with_context(|| format!("ran out of calendar looking for Sunday #{n} since {since}"))
}
