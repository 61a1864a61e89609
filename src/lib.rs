//! Calendar-aware dates: conversion through Julian Day numbers, arithmetic
//! by year, month, week and day, and pattern-based formatting.
//!
//! ```
//! use calendars::{Calendar, Period};
//!
//! let gregorian = Calendar::gregorian();
//! let date = gregorian.new_date(2024, 1, 31)?;
//!
//! let next = date.add(1, Period::Month)?;
//! assert_eq!((next.year(), next.month(), next.day()), (2024, 2, 29));
//! assert_eq!(next.format("yyyy-mm-dd"), "2024-02-29");
//! assert_eq!(next.format("DD, MM d, yyyy"), "Thursday, February 29, 2024");
//! # Ok::<(), calendars::CalendarError>(())
//! ```

mod calendar;
mod consts;
mod date;
pub mod engine;
mod format;
mod gregorian;
mod locale;
mod platform;
mod prelude;
mod system;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, CalendarKind};
pub use consts::*;
pub use date::CalendarDate;
pub use format::FormatSettings;
pub use gregorian::{GREGORIAN_NAME, Gregorian};
pub use locale::{Locale, Messages, RegionalOptions, replace_placeholders};
pub use system::CalendarSystem;
pub use types::{DateField, InvalidKind, JulianDay, Period, Ymd};

/// Errors raised by calendar operations.
///
/// `Display` renders the English message; [`CalendarError::localize`]
/// renders a locale's template instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid {calendar} date")]
    InvalidDate { calendar: String },

    #[error("Invalid {calendar} month")]
    InvalidMonth { calendar: String },

    #[error("Invalid {calendar} year")]
    InvalidYear { calendar: String },

    /// A date bound to one calendar was handed to another.
    #[error("Cannot mix {expected} and {found} dates")]
    DifferentCalendars { expected: String, found: String },

    #[error("Calendar {0} not found")]
    InvalidCalendar(String),

    #[error("Regional Options is missing from {0}")]
    MissingLocale(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The date cannot be represented by the platform date type.
    #[error("Julian day {0} is outside the platform date range")]
    OutOfRange(JulianDay),
}

impl CalendarError {
    /// Renders the message with a locale's templates.
    pub fn localize(&self, messages: &Messages) -> String {
        match self {
            Self::InvalidDate { calendar } => replace_placeholders(&messages.invalid_date, &[calendar.as_str()]),
            Self::InvalidMonth { calendar } => replace_placeholders(&messages.invalid_month, &[calendar.as_str()]),
            Self::InvalidYear { calendar } => replace_placeholders(&messages.invalid_year, &[calendar.as_str()]),
            Self::DifferentCalendars { expected, found } => {
                replace_placeholders(&messages.different_calendars, &[expected.as_str(), found.as_str()])
            },
            Self::InvalidCalendar(name) => replace_placeholders(&messages.invalid_calendar, &[name.as_str()]),
            Self::MissingLocale(owner) => replace_placeholders(&messages.missing_locale, &[owner.as_str()]),
            Self::InvalidPeriod(period) => replace_placeholders(&messages.invalid_arguments, &[period.as_str()]),
            Self::OutOfRange(jd) => replace_placeholders(&messages.out_of_range, &[jd.to_string().as_str()]),
        }
    }
}
