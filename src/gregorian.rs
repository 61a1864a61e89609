//! The proleptic Gregorian calendar, without a year zero.

use crate::consts::{CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE};
use crate::engine;
use crate::locale::{Locale, Messages, RegionalOptions};
use crate::system::CalendarSystem;
use crate::types::{JulianDay, Ymd};

/// Display name of the Gregorian calendar
pub const GREGORIAN_NAME: &str = "Gregorian";

/// The Gregorian calendar. Year 1 BCE is followed directly by 1 CE.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Gregorian;

impl Gregorian {
    /// The built-in English locale
    pub fn english() -> Locale {
        fn names(list: &[&str]) -> Vec<String> {
            list.iter().map(|&name| name.to_owned()).collect()
        }

        Locale {
            epochs:            ["BCE".to_owned(), "CE".to_owned()],
            month_names:       names(&[
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]),
            month_names_short: names(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            day_names:         names(&[
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]),
            day_names_short:   names(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
            digits:            None,
            local_numbers:     false,
            date_format:       "mm/dd/yyyy".to_owned(),
            messages:          Messages::default(),
        }
    }
}

impl CalendarSystem for Gregorian {
    fn name(&self) -> &str {
        GREGORIAN_NAME
    }

    fn has_year_zero(&self) -> bool {
        false
    }

    fn leap_year(&self, year: i32) -> bool {
        // 1 BCE behaves like year 0 of the astronomical count
        let year = if year < 0 { year + 1 } else { year };
        year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
    }

    fn days_in_month(&self, year: i32, month: i32) -> i32 {
        let days = usize::try_from(month)
            .ok()
            .filter(|&index| index > 0)
            .and_then(|index| DAYS_IN_MONTH.get(index))
            .copied()
            .unwrap_or(0);
        if month == FEBRUARY && self.leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            days
        }
    }

    // Jean Meeus, "Astronomical Algorithms", 1991
    fn to_jd(&self, date: Ymd) -> JulianDay {
        let mut year = if date.year < 0 { date.year + 1 } else { date.year };
        let mut month = date.month;
        if month < 3 {
            month += 12;
            year -= 1;
        }
        let year = f64::from(year);
        let a = (year / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        JulianDay::new(
            (365.25 * (year + 4716.0)).floor() + (30.6001 * f64::from(month + 1)).floor() + f64::from(date.day) + b
                - 1524.5,
        )
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_jd(&self, jd: JulianDay) -> Ymd {
        let z = (jd.get() + 0.5).floor();
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (e * 30.6001).floor();
        let month = e - if e > 13.5 { 13.0 } else { 1.0 };
        let mut year = c - if month > 2.5 { 4716.0 } else { 4715.0 };
        if year <= 0.0 {
            year -= 1.0;
        }
        Ymd::new(year as i32, month as i32, day as i32)
    }

    fn week_of_year(&self, date: Ymd) -> i32 {
        engine::iso_week_of_year(self, date)
    }

    fn regional_options(&self) -> RegionalOptions {
        RegionalOptions::from_iter([("english", Self::english())])
    }
}
