//! Calendar variants and helpers shared by the unit tests.

use crate::calendar::Calendar;
use crate::date::CalendarDate;
use crate::gregorian::Gregorian;
use crate::locale::RegionalOptions;
use crate::system::CalendarSystem;
use crate::types::{JulianDay, Ymd};

/// Gregorian months in a year running from July to June.
#[derive(Debug, Clone, Copy)]
pub struct FiscalGregorian;

impl CalendarSystem for FiscalGregorian {
    fn name(&self) -> &str {
        "Fiscal"
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn first_month(&self) -> i32 {
        7
    }

    fn leap_year(&self, year: i32) -> bool {
        Gregorian.leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        Gregorian.days_in_month(year, month)
    }

    fn to_jd(&self, date: Ymd) -> JulianDay {
        Gregorian.to_jd(date)
    }

    fn from_jd(&self, jd: JulianDay) -> Ymd {
        Gregorian.from_jd(jd)
    }

    fn week_of_year(&self, date: Ymd) -> i32 {
        Gregorian.week_of_year(date)
    }

    fn regional_options(&self) -> RegionalOptions {
        Gregorian.regional_options()
    }
}

/// Gregorian with astronomical year numbering: year 0 is 1 BCE.
#[derive(Debug, Clone, Copy)]
pub struct AstronomicalGregorian;

impl AstronomicalGregorian {
    const fn historical(year: i32) -> i32 {
        if year <= 0 { year - 1 } else { year }
    }
}

impl CalendarSystem for AstronomicalGregorian {
    fn name(&self) -> &str {
        "Astronomical"
    }

    fn has_year_zero(&self) -> bool {
        true
    }

    fn leap_year(&self, year: i32) -> bool {
        Gregorian.leap_year(Self::historical(year))
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        Gregorian.days_in_month(Self::historical(year), month)
    }

    fn to_jd(&self, date: Ymd) -> JulianDay {
        Gregorian.to_jd(Ymd::new(Self::historical(date.year), date.month, date.day))
    }

    fn from_jd(&self, jd: JulianDay) -> Ymd {
        let date = Gregorian.from_jd(jd);
        let year = if date.year < 0 { date.year + 1 } else { date.year };
        Ymd::new(year, date.month, date.day)
    }

    fn week_of_year(&self, date: Ymd) -> i32 {
        crate::engine::iso_week_of_year(self, date)
    }

    fn regional_options(&self) -> RegionalOptions {
        Gregorian.regional_options()
    }
}

/// Gregorian that reports a year-dependent month count, so month
/// arithmetic carries one year at a time.
#[derive(Debug, Clone, Copy)]
pub struct SteppedGregorian;

impl CalendarSystem for SteppedGregorian {
    fn name(&self) -> &str {
        "Stepped"
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn fixed_months_in_year(&self) -> Option<i32> {
        None
    }

    fn leap_year(&self, year: i32) -> bool {
        Gregorian.leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        Gregorian.days_in_month(year, month)
    }

    fn to_jd(&self, date: Ymd) -> JulianDay {
        Gregorian.to_jd(date)
    }

    fn from_jd(&self, jd: JulianDay) -> Ymd {
        Gregorian.from_jd(jd)
    }

    fn week_of_year(&self, date: Ymd) -> i32 {
        Gregorian.week_of_year(date)
    }

    fn regional_options(&self) -> RegionalOptions {
        Gregorian.regional_options()
    }
}

/// A variant that ships no locale at all.
#[derive(Debug, Clone, Copy)]
pub struct Unlocalized;

impl CalendarSystem for Unlocalized {
    fn name(&self) -> &str {
        "Unlocalized"
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn leap_year(&self, year: i32) -> bool {
        Gregorian.leap_year(year)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        Gregorian.days_in_month(year, month)
    }

    fn to_jd(&self, date: Ymd) -> JulianDay {
        Gregorian.to_jd(date)
    }

    fn from_jd(&self, jd: JulianDay) -> Ymd {
        Gregorian.from_jd(jd)
    }

    fn week_of_year(&self, date: Ymd) -> i32 {
        Gregorian.week_of_year(date)
    }

    fn regional_options(&self) -> RegionalOptions {
        RegionalOptions::default()
    }
}

/// A valid Gregorian date
pub fn date(year: i32, month: i32, day: i32) -> CalendarDate {
    Calendar::gregorian()
        .new_date(year, month, day)
        .expect("valid Gregorian date")
}

pub fn fiscal() -> Calendar {
    Calendar::with_locale(FiscalGregorian, Gregorian::english())
}

pub fn astronomical() -> Calendar {
    Calendar::with_locale(AstronomicalGregorian, Gregorian::english())
}
