//! Calendar-independent algorithms built on [`CalendarSystem`] primitives.
//!
//! Nothing here validates caller input. Callers pass fields that are
//! already known to be valid (or, inside `add`, intermediate candidates
//! whose validity is decided by the final result), so each public
//! operation validates exactly once at the outermost call. Conversions from
//! a Julian Day are the exception: `checked_from_jd` rejects days the
//! calendar cannot name.

use crate::consts::DAYS_IN_WEEK;
use crate::system::CalendarSystem;
use crate::types::{DateField, JulianDay, Period, Ymd};

/// Whether the triple names a real date in this calendar.
pub fn is_valid<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd) -> bool {
    if !sys.has_year_zero() && date.year == 0 {
        return false;
    }
    let within = |value: i32, min: i32, count: i32| {
        value >= min && i64::from(value) - i64::from(min) < i64::from(count)
    };
    within(date.month, sys.min_month(), sys.months_in_year(date.year))
        && within(date.day, sys.min_day(), sys.days_in_month(date.year, date.month))
}

/// Ordinal position of `month` within its year, counted from `min_month`.
pub fn month_of_year<S: CalendarSystem + ?Sized>(sys: &S, year: i32, month: i32) -> i32 {
    let months = sys.months_in_year(year);
    (month + months - sys.first_month()) % months + sys.min_month()
}

/// Month number at ordinal position `ordinal` of the year.
pub fn from_month_of_year<S: CalendarSystem + ?Sized>(sys: &S, year: i32, ordinal: i32) -> i32 {
    (ordinal + sys.first_month() - 2 * sys.min_month()) % sys.months_in_year(year) + sys.min_month()
}

pub fn days_in_year<S: CalendarSystem + ?Sized>(sys: &S, year: i32) -> i32 {
    if sys.leap_year(year) { 366 } else { 365 }
}

/// First day of the year `year`.
fn start_of_year<S: CalendarSystem + ?Sized>(sys: &S, year: i32) -> Ymd {
    Ymd::new(year, from_month_of_year(sys, year, sys.min_month()), sys.min_day())
}

/// 1-based day within the year.
#[allow(clippy::cast_possible_truncation)]
pub fn day_of_year<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd) -> i32 {
    let elapsed = sys.to_jd(date).get() - sys.to_jd(start_of_year(sys, date.year)).get();
    elapsed.round() as i32 + 1
}

/// Day of the week, `0..DAYS_IN_WEEK`, where 0 is the variant's first weekday.
#[allow(clippy::cast_possible_truncation)]
pub fn day_of_week<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd) -> i32 {
    let day = sys.to_jd(date).get().floor() as i64 + 2;
    day.rem_euclid(i64::from(DAYS_IN_WEEK)) as i32
}

/// Moves the date by a whole number of days through Julian Day.
pub fn shift_days<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd, days: i32) -> Ymd {
    sys.from_jd(sys.to_jd(date).plus_days(days))
}

/// ISO 8601 week number: the week containing the Thursday of the date's
/// Monday-based week, counted within that Thursday's year.
pub fn iso_week_of_year<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd) -> i32 {
    let weekday = match day_of_week(sys, date) {
        0 => DAYS_IN_WEEK,
        day => day,
    };
    let thursday = shift_days(sys, date, 4 - weekday);
    (day_of_year(sys, thursday) - 1) / DAYS_IN_WEEK + 1
}

/// Adds `offset` periods, skipping year zero when the calendar has none.
///
/// `None` when the result lies outside the representable years.
pub fn add<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd, offset: i32, period: Period) -> Option<Ymd> {
    let offset = i64::from(offset);
    let candidate = add_unadjusted(sys, date, offset, period)?;
    if sys.has_year_zero() || !matches!(period, Period::Year | Period::Month) {
        return Some(candidate);
    }
    if candidate.year != 0 && (date.year > 0) == (candidate.year > 0) {
        return Some(candidate);
    }

    let (scale, extra, unit) = match period {
        Period::Year => (1, 1, Period::Year),
        Period::Month => (1, i64::from(sys.months_in_year(-1)), Period::Month),
        Period::Week => (i64::from(DAYS_IN_WEEK), i64::from(days_in_year(sys, -1)), Period::Day),
        Period::Day => (1, i64::from(days_in_year(sys, -1)), Period::Day),
    };
    let direction = if offset < 0 { -1 } else { 1 };
    tracing::trace!(
        calendar = sys.name(),
        %date,
        %candidate,
        %period,
        "skipping year zero"
    );
    add_unadjusted(sys, date, offset * scale + direction * extra, unit)
}

fn add_unadjusted<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd, offset: i64, period: Period) -> Option<Ymd> {
    match period {
        Period::Day => shift_days_checked(sys, date, offset),
        Period::Week => shift_days_checked(sys, date, offset * i64::from(DAYS_IN_WEEK)),
        Period::Year => {
            let year = i32::try_from(i64::from(date.year) + offset).ok()?;
            let mut ordinal = month_of_year(sys, date.year, date.month);
            if date.month != from_month_of_year(sys, year, ordinal) {
                ordinal = month_of_year(sys, year, date.month);
            }
            ordinal = ordinal.min(sys.months_in_year(year));
            Some(finish(sys, year, ordinal, date.day))
        },
        Period::Month => {
            let ordinal = i64::from(month_of_year(sys, date.year, date.month)) + offset;
            let (year, ordinal) = resync_year_month(sys, date.year, ordinal)?;
            Some(finish(sys, year, ordinal, date.day))
        },
    }
}

/// Day shift of any size; `None` if the target day has no valid date.
#[allow(clippy::cast_precision_loss)]
fn shift_days_checked<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd, days: i64) -> Option<Ymd> {
    checked_from_jd(sys, JulianDay::new(sys.to_jd(date).get() + days as f64))
}

/// The date containing `jd`, or `None` when `jd` is not finite or the
/// calendar cannot name a valid date for it.
pub fn checked_from_jd<S: CalendarSystem + ?Sized>(sys: &S, jd: JulianDay) -> Option<Ymd> {
    if !jd.get().is_finite() {
        return None;
    }
    let date = sys.from_jd(jd);
    if !is_valid(sys, date) {
        return None;
    }
    // Out-of-range conversions saturate, so the day must contain `jd`
    let start = sys.to_jd(date).get();
    (start <= jd.get() && jd.get() < start + 1.0).then_some(date)
}

/// Carries ordinal-month overflow and underflow into the year.
///
/// A fixed month count carries whole years at once. Otherwise it steps a
/// year at a time, since the length of a year may depend on the year.
fn resync_year_month<S: CalendarSystem + ?Sized>(sys: &S, year: i32, ordinal: i64) -> Option<(i32, i32)> {
    let min = i64::from(sys.min_month());
    if let Some(months) = sys.fixed_months_in_year().filter(|&months| months > 0) {
        let months = i64::from(months);
        let index = ordinal - min;
        let year = i32::try_from(i64::from(year) + index.div_euclid(months)).ok()?;
        let ordinal = i32::try_from(index.rem_euclid(months) + min).ok()?;
        return Some((year, ordinal));
    }

    let (mut year, mut ordinal) = (year, ordinal);
    while ordinal < min {
        year = year.checked_sub(1)?;
        ordinal += i64::from(sys.months_in_year(year));
    }
    let mut months = i64::from(sys.months_in_year(year));
    while ordinal > months - 1 + min {
        year = year.checked_add(1)?;
        ordinal -= months;
        months = i64::from(sys.months_in_year(year));
    }
    Some((year, i32::try_from(ordinal).ok()?))
}

/// Maps the ordinal back to a month number and clamps the day to its length.
fn finish<S: CalendarSystem + ?Sized>(sys: &S, year: i32, ordinal: i32, day: i32) -> Ymd {
    let month = from_month_of_year(sys, year, ordinal);
    Ymd::new(year, month, day.min(sys.days_in_month(year, month)))
}

/// Replaces one field. Changing the year or month clamps the day to the new
/// month's length; nothing overflows into neighbouring fields.
pub fn set<S: CalendarSystem + ?Sized>(sys: &S, date: Ymd, value: i32, field: DateField) -> Ymd {
    match field {
        DateField::Year => Ymd::new(value, date.month, date.day.min(sys.days_in_month(value, date.month))),
        DateField::Month => Ymd::new(date.year, value, date.day.min(sys.days_in_month(date.year, value))),
        DateField::Day => Ymd::new(date.year, date.month, value),
    }
}
