use crate::CalendarError;
use crate::calendar::Calendar;
use crate::consts::DEFAULT_LANGUAGE;
use crate::engine;
use crate::format::{self, FormatSettings};
use crate::types::{DateField, JulianDay, Period, Ymd};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A valid (year, month, day) in one particular calendar.
///
/// Dates are values: `add`, `set` and `with_ymd` return a new date and leave
/// the receiver untouched. Queries never fail because the triple is
/// validated whenever a date is produced.
#[derive(Debug, Clone)]
pub struct CalendarDate {
    calendar: Calendar,
    year:     i32,
    month:    i32,
    day:      i32,
}

impl CalendarDate {
    /// Binds a triple already known to be valid for `calendar`
    pub(crate) const fn from_trusted(calendar: Calendar, ymd: Ymd) -> Self {
        Self {
            calendar,
            year: ymd.year,
            month: ymd.month,
            day: ymd.day,
        }
    }

    pub const fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number in the calendar's own numbering
    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn ymd(&self) -> Ymd {
        Ymd::new(self.year, self.month, self.day)
    }

    /// A date with other fields in the same calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn with_ymd(&self, year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        self.calendar.new_date(year, month, day)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the result does not exist.
    pub fn add(&self, offset: i32, period: Period) -> Result<Self, CalendarError> {
        self.calendar.add(self, offset, period)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDate`
    /// if the replaced field is out of range.
    pub fn set(&self, value: i32, field: DateField) -> Result<Self, CalendarError> {
        self.calendar.set(self, value, field)
    }

    /// # Errors
    /// See [`CalendarDate::set`].
    pub fn with_year(&self, year: i32) -> Result<Self, CalendarError> {
        self.set(year, DateField::Year)
    }

    /// # Errors
    /// See [`CalendarDate::set`].
    pub fn with_month(&self, month: i32) -> Result<Self, CalendarError> {
        self.set(month, DateField::Month)
    }

    /// # Errors
    /// See [`CalendarDate::set`].
    pub fn with_day(&self, day: i32) -> Result<Self, CalendarError> {
        self.set(day, DateField::Day)
    }

    pub fn leap_year(&self) -> bool {
        self.calendar.system().leap_year(self.year)
    }

    pub fn epoch(&self) -> &str {
        self.calendar.locale().epoch(self.year)
    }

    pub fn format_year(&self) -> String {
        format::format_year(self.year)
    }

    pub fn month_of_year(&self) -> i32 {
        engine::month_of_year(self.calendar.system(), self.year, self.month)
    }

    pub fn week_of_year(&self) -> i32 {
        self.calendar.system().week_of_year(self.ymd())
    }

    pub fn days_in_year(&self) -> i32 {
        engine::days_in_year(self.calendar.system(), self.year)
    }

    pub fn day_of_year(&self) -> i32 {
        engine::day_of_year(self.calendar.system(), self.ymd())
    }

    pub fn days_in_month(&self) -> i32 {
        self.calendar.system().days_in_month(self.year, self.month)
    }

    /// 0 is the calendar's first weekday (Sunday for Gregorian)
    pub fn day_of_week(&self) -> i32 {
        engine::day_of_week(self.calendar.system(), self.ymd())
    }

    pub fn week_day(&self) -> bool {
        self.calendar.system().week_day(self.ymd())
    }

    pub fn to_jd(&self) -> JulianDay {
        self.calendar.system().to_jd(self.ymd())
    }

    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` if `other` belongs to
    /// another calendar.
    pub fn compare(&self, other: &Self) -> Result<Ordering, CalendarError> {
        self.calendar.compare(self, other)
    }

    /// Renders with `pattern` and the calendar's locale names
    pub fn format(&self, pattern: &str) -> String {
        self.format_with(pattern, &FormatSettings::default())
    }

    /// Renders with `pattern`, or the locale default when empty, applying
    /// the name and digit overrides in `settings`
    pub fn format_with(&self, pattern: &str, settings: &FormatSettings) -> String {
        let pattern = if pattern.is_empty() {
            self.calendar.locale().date_format.as_str()
        } else {
            pattern
        };
        format::render(&self.calendar, self, pattern, settings)
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.calendar.is_same(&other.calendar) && self.ymd() == other.ymd()
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.calendar.name().hash(state);
        self.ymd().hash(state);
    }
}

impl PartialOrd for CalendarDate {
    /// `None` for dates of different calendars
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(""))
    }
}

/// Serialized shape of a date: the calendar is recorded by name.
#[derive(Serialize, Deserialize)]
struct DateRecord {
    calendar: String,
    year:     i32,
    month:    i32,
    day:      i32,
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        DateRecord {
            calendar: self.calendar.name().to_owned(),
            year:     self.year,
            month:    self.month,
            day:      self.day,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let record = DateRecord::deserialize(deserializer)?;
        Calendar::named(&record.calendar, Some(DEFAULT_LANGUAGE))
            .and_then(|calendar| calendar.new_date(record.year, record.month, record.day))
            .map_err(serde::de::Error::custom)
    }
}
