//! Bridge to `chrono`'s platform date type.
//!
//! Conversions go through the Julian Day, so BCE years land on chrono's
//! astronomical numbering (1 BCE is chrono year 0).

use crate::CalendarError;
use crate::calendar::Calendar;
use crate::consts::TICKS_EPOCH;
use crate::date::CalendarDate;
use crate::types::JulianDay;
use chrono::{Datelike, NaiveDate};

impl Calendar {
    /// The day `date` names, expressed in this calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if this calendar cannot name the day.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_naive_date(&self, date: NaiveDate) -> Result<CalendarDate, CalendarError> {
        let days = date.num_days_from_ce() - 1;
        self.from_jd(JulianDay::new(TICKS_EPOCH).plus_days(days))
    }

    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another
    /// calendar, or `CalendarError::OutOfRange` if chrono cannot represent it.
    pub fn to_naive_date(&self, date: &CalendarDate) -> Result<NaiveDate, CalendarError> {
        self.ensure_same(date)?;
        naive_date(date.to_jd())
    }

    /// The current local day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if this calendar cannot name the day.
    pub fn today(&self) -> Result<CalendarDate, CalendarError> {
        self.from_naive_date(chrono::Local::now().date_naive())
    }
}

impl CalendarDate {
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if chrono cannot represent the date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, CalendarError> {
        naive_date(self.to_jd())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn naive_date(jd: JulianDay) -> Result<NaiveDate, CalendarError> {
    let days = (jd.get() - TICKS_EPOCH).floor() + 1.0;
    if !(f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&days) {
        return Err(CalendarError::OutOfRange(jd));
    }
    NaiveDate::from_num_days_from_ce_opt(days as i32).ok_or(CalendarError::OutOfRange(jd))
}
