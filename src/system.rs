use crate::consts::DAYS_IN_WEEK;
use crate::engine;
use crate::locale::RegionalOptions;
use crate::types::{JulianDay, Ymd};
use std::fmt;

/// The capabilities every calendar variant provides.
///
/// Methods receive fields that the validating [`Calendar`](crate::Calendar)
/// surface has already checked, so they never fail. Generic algorithms in
/// [`engine`] are built on top of these primitives; a variant that needs one
/// of them calls it directly, passing itself.
pub trait CalendarSystem: fmt::Debug + Send + Sync {
    /// Display name, also the identity used to tell calendars apart
    fn name(&self) -> &str;

    /// Whether the year sequence contains a year 0
    fn has_year_zero(&self) -> bool;

    /// Lowest month number
    fn min_month(&self) -> i32 {
        1
    }

    /// Month number the year starts on
    fn first_month(&self) -> i32 {
        self.min_month()
    }

    /// Lowest day number
    fn min_day(&self) -> i32 {
        1
    }

    /// Month count shared by every year, `None` when it varies by year.
    /// Variants overriding `months_in_year` with a year-dependent count must
    /// return `None` here.
    fn fixed_months_in_year(&self) -> Option<i32> {
        Some(12)
    }

    fn months_in_year(&self, _year: i32) -> i32 {
        self.fixed_months_in_year().unwrap_or(12)
    }

    fn leap_year(&self, year: i32) -> bool;

    fn days_in_month(&self, year: i32, month: i32) -> i32;

    fn to_jd(&self, date: Ymd) -> JulianDay;

    #[allow(clippy::wrong_self_convention)]
    fn from_jd(&self, jd: JulianDay) -> Ymd;

    fn week_of_year(&self, date: Ymd) -> i32;

    /// Whether the date falls on a working day (Monday to Friday)
    fn week_day(&self, date: Ymd) -> bool {
        let day = engine::day_of_week(self, date);
        (if day == 0 { DAYS_IN_WEEK } else { day }) < 6
    }

    /// Built-in locale tables, by language
    fn regional_options(&self) -> RegionalOptions;
}
