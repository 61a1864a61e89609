use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A raw (year, month, day) triple in the numbering of some calendar.
///
/// Carries no calendar binding and no validity guarantee; it is the unit of
/// exchange between a [`CalendarSystem`](crate::CalendarSystem) and the
/// generic [`engine`](crate::engine).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Ymd {
    pub year:  i32,
    pub month: i32,
    pub day:   i32,
}

impl Ymd {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }
}

/// A Julian Day number: days since noon, 1 January 4713 BCE (proleptic Julian).
///
/// Midnight dates always carry a `.5` fraction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JulianDay(f64);

impl JulianDay {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw day count
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Shifts by a whole number of days
    #[inline]
    pub fn plus_days(self, days: i32) -> Self {
        Self(self.0 + f64::from(days))
    }
}

/// Unit of an `add` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Period {
    #[display(fmt = "y")]
    Year,
    #[display(fmt = "m")]
    Month,
    #[display(fmt = "w")]
    Week,
    #[display(fmt = "d")]
    Day,
}

impl FromStr for Period {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "y" => Ok(Self::Year),
            "m" => Ok(Self::Month),
            "w" => Ok(Self::Week),
            "d" => Ok(Self::Day),
            other => Err(CalendarError::InvalidPeriod(other.to_owned())),
        }
    }
}

/// The field replaced by a `set` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateField {
    #[display(fmt = "y")]
    Year,
    #[display(fmt = "m")]
    Month,
    #[display(fmt = "d")]
    Day,
}

impl FromStr for DateField {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "y" => Ok(Self::Year),
            "m" => Ok(Self::Month),
            "d" => Ok(Self::Day),
            other => Err(CalendarError::InvalidPeriod(other.to_owned())),
        }
    }
}

/// Which error a validating call raises when its candidate is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidKind {
    Date,
    Month,
    Year,
}

impl InvalidKind {
    pub(crate) fn error(self, calendar: &str) -> CalendarError {
        let calendar = calendar.to_owned();
        match self {
            Self::Date => CalendarError::InvalidDate { calendar },
            Self::Month => CalendarError::InvalidMonth { calendar },
            Self::Year => CalendarError::InvalidYear { calendar },
        }
    }
}
