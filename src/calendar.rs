use crate::consts::DAYS_IN_WEEK;
use crate::date::CalendarDate;
use crate::engine;
use crate::format::{self, FormatSettings};
use crate::gregorian::Gregorian;
use crate::locale::Locale;
use crate::prelude::*;
use crate::system::CalendarSystem;
use crate::types::{DateField, InvalidKind, JulianDay, Period, Ymd};
use crate::CalendarError;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

/// The calendar variants known by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum CalendarKind {
    #[display(fmt = "gregorian")]
    Gregorian,
}

impl CalendarKind {
    fn system(self) -> Arc<dyn CalendarSystem> {
        match self {
            Self::Gregorian => Arc::new(Gregorian),
        }
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    /// Case-insensitive; an empty name selects the Gregorian calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.eq_ignore_ascii_case("gregorian") {
            Ok(Self::Gregorian)
        } else {
            Err(CalendarError::InvalidCalendar(name.to_owned()))
        }
    }
}

/// A calendar variant bound to a locale.
///
/// Every operation taking raw fields validates them once, here; the
/// algorithms underneath run on trusted values. Cloning is cheap and the
/// handle can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Calendar {
    system: Arc<dyn CalendarSystem>,
    locale: Arc<Locale>,
}

impl Calendar {
    /// The Gregorian calendar with its English locale
    pub fn gregorian() -> Self {
        Self::with_locale(Gregorian, Gregorian::english())
    }

    /// Binds `system` to one of its own locales, `language` if declared,
    /// otherwise the first one.
    ///
    /// # Errors
    /// Returns `CalendarError::MissingLocale` if the variant declares none.
    pub fn new(system: impl CalendarSystem + 'static, language: Option<&str>) -> Result<Self, CalendarError> {
        Self::from_system(Arc::new(system), language)
    }

    /// Binds `system` to a caller-supplied locale
    pub fn with_locale(system: impl CalendarSystem + 'static, locale: Locale) -> Self {
        Self {
            system: Arc::new(system),
            locale: Arc::new(locale),
        }
    }

    /// # Errors
    /// Returns `CalendarError::MissingLocale` if the variant declares no locale.
    pub fn from_kind(kind: CalendarKind, language: Option<&str>) -> Result<Self, CalendarError> {
        Self::from_system(kind.system(), language)
    }

    /// Looks a calendar up by name, e.g. `"gregorian"`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidCalendar` for an unknown name.
    pub fn named(name: &str, language: Option<&str>) -> Result<Self, CalendarError> {
        Self::from_kind(name.parse()?, language)
    }

    fn from_system(system: Arc<dyn CalendarSystem>, language: Option<&str>) -> Result<Self, CalendarError> {
        let options = system.regional_options();
        let locale = options.select(language, system.name())?.clone();
        Ok(Self {
            system,
            locale: Arc::new(locale),
        })
    }

    pub fn name(&self) -> &str {
        self.system.name()
    }

    pub fn system(&self) -> &dyn CalendarSystem {
        self.system.as_ref()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn has_year_zero(&self) -> bool {
        self.system.has_year_zero()
    }

    pub fn min_month(&self) -> i32 {
        self.system.min_month()
    }

    pub fn first_month(&self) -> i32 {
        self.system.first_month()
    }

    pub fn min_day(&self) -> i32 {
        self.system.min_day()
    }

    /// Whether both handles denote the same calendar variant
    pub fn is_same(&self, other: &Self) -> bool {
        self.name() == other.name()
    }

    pub(crate) fn ensure_same(&self, date: &CalendarDate) -> Result<(), CalendarError> {
        if self.is_same(date.calendar()) {
            Ok(())
        } else {
            Err(CalendarError::DifferentCalendars {
                expected: self.name().to_owned(),
                found:    date.calendar().name().to_owned(),
            })
        }
    }

    // --- construction ---

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn new_date(&self, year: i32, month: i32, day: i32) -> Result<CalendarDate, CalendarError> {
        self.validate(year, month, day, InvalidKind::Date)
    }

    /// Copies the fields of a date of this calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another calendar.
    pub fn copy_date(&self, date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
        self.ensure_same(date)?;
        Ok(CalendarDate::from_trusted(self.clone(), date.ymd()))
    }

    /// The same day expressed in this calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if this calendar cannot name the day.
    pub fn convert(&self, date: &CalendarDate) -> Result<CalendarDate, CalendarError> {
        self.from_jd(date.to_jd())
    }

    /// The date containing `jd`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a non-finite day or one
    /// outside the years this calendar can name.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_jd(&self, jd: JulianDay) -> Result<CalendarDate, CalendarError> {
        let ymd = engine::checked_from_jd(self.system(), jd).ok_or_else(|| {
            tracing::debug!(calendar = self.name(), %jd, "no date for julian day");
            InvalidKind::Date.error(self.name())
        })?;
        Ok(CalendarDate::from_trusted(self.clone(), ymd))
    }

    // --- validation ---

    pub fn is_valid(&self, year: i32, month: i32, day: i32) -> bool {
        engine::is_valid(self.system(), Ymd::new(year, month, day))
    }

    /// Builds the date, raising `kind` if the fields do not form one.
    ///
    /// # Errors
    /// Returns the error selected by `kind`.
    pub fn validate(&self, year: i32, month: i32, day: i32, kind: InvalidKind) -> Result<CalendarDate, CalendarError> {
        let ymd = self.checked(Ymd::new(year, month, day), kind)?;
        Ok(CalendarDate::from_trusted(self.clone(), ymd))
    }

    /// Passes a date of this calendar through unchanged.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another calendar.
    pub fn check<'d>(&self, date: &'d CalendarDate) -> Result<&'d CalendarDate, CalendarError> {
        self.ensure_same(date)?;
        Ok(date)
    }

    fn checked(&self, ymd: Ymd, kind: InvalidKind) -> Result<Ymd, CalendarError> {
        if engine::is_valid(self.system(), ymd) {
            Ok(ymd)
        } else {
            tracing::debug!(calendar = self.name(), date = %ymd, ?kind, "rejected candidate date");
            Err(kind.error(self.name()))
        }
    }

    fn checked_year(&self, year: i32) -> Result<i32, CalendarError> {
        self.checked(Ymd::new(year, self.min_month(), self.min_day()), InvalidKind::Year)
            .map(|ymd| ymd.year)
    }

    fn checked_month(&self, year: i32, month: i32) -> Result<Ymd, CalendarError> {
        self.checked(Ymd::new(year, month, self.min_day()), InvalidKind::Month)
    }

    fn checked_date(&self, year: i32, month: i32, day: i32) -> Result<Ymd, CalendarError> {
        self.checked(Ymd::new(year, month, day), InvalidKind::Date)
    }

    // --- field-based queries ---

    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a year the calendar lacks.
    pub fn leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        Ok(self.system.leap_year(self.checked_year(year)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a year the calendar lacks.
    pub fn months_in_year(&self, year: i32) -> Result<i32, CalendarError> {
        Ok(self.system.months_in_year(self.checked_year(year)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a year the calendar lacks.
    pub fn days_in_year(&self, year: i32) -> Result<i32, CalendarError> {
        Ok(engine::days_in_year(self.system(), self.checked_year(year)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for an invalid year or month.
    pub fn days_in_month(&self, year: i32, month: i32) -> Result<i32, CalendarError> {
        let ymd = self.checked_month(year, month)?;
        Ok(self.system.days_in_month(ymd.year, ymd.month))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for an invalid year or month.
    pub fn month_of_year(&self, year: i32, month: i32) -> Result<i32, CalendarError> {
        let ymd = self.checked_month(year, month)?;
        Ok(engine::month_of_year(self.system(), ymd.year, ymd.month))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the resulting month is invalid.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_month_of_year(&self, year: i32, ordinal: i32) -> Result<i32, CalendarError> {
        let months = self.system.months_in_year(year);
        let min = self.min_month();
        if ordinal < min || i64::from(ordinal) - i64::from(min) >= i64::from(months) {
            return Err(InvalidKind::Month.error(self.name()));
        }
        let month = engine::from_month_of_year(self.system(), year, ordinal);
        Ok(self.checked_month(year, month)?.month)
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn day_of_year(&self, year: i32, month: i32, day: i32) -> Result<i32, CalendarError> {
        Ok(engine::day_of_year(self.system(), self.checked_date(year, month, day)?))
    }

    pub const fn days_in_week(&self) -> i32 {
        DAYS_IN_WEEK
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn day_of_week(&self, year: i32, month: i32, day: i32) -> Result<i32, CalendarError> {
        Ok(engine::day_of_week(self.system(), self.checked_date(year, month, day)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn week_of_year(&self, year: i32, month: i32, day: i32) -> Result<i32, CalendarError> {
        Ok(self.system.week_of_year(self.checked_date(year, month, day)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn week_day(&self, year: i32, month: i32, day: i32) -> Result<bool, CalendarError> {
        Ok(self.system.week_day(self.checked_date(year, month, day)?))
    }

    /// Epoch designator for the year, e.g. `BCE` or `CE`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a year the calendar lacks.
    pub fn epoch(&self, year: i32) -> Result<&str, CalendarError> {
        Ok(self.locale.epoch(self.checked_year(year)?))
    }

    /// Signed, zero-padded year, e.g. `-0044`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidYear` for a year the calendar lacks.
    pub fn format_year(&self, year: i32) -> Result<String, CalendarError> {
        Ok(format::format_year(self.checked_year(year)?))
    }

    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the fields do not form a date.
    pub fn to_jd(&self, year: i32, month: i32, day: i32) -> Result<JulianDay, CalendarError> {
        Ok(self.system.to_jd(self.checked_date(year, month, day)?))
    }

    // --- date-based operations ---

    /// Adds `offset` periods to `date`. Months and years clamp the day to
    /// the target month's length; year zero is skipped when the calendar
    /// has none.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another
    /// calendar, or `CalendarError::InvalidDate` if the result does not exist.
    pub fn add(&self, date: &CalendarDate, offset: i32, period: Period) -> Result<CalendarDate, CalendarError> {
        self.ensure_same(date)?;
        let ymd = engine::add(self.system(), date.ymd(), offset, period).ok_or_else(|| {
            tracing::debug!(calendar = self.name(), date = %date.ymd(), offset, %period, "result out of range");
            InvalidKind::Date.error(self.name())
        })?;
        self.validate(ymd.year, ymd.month, ymd.day, InvalidKind::Date)
    }

    /// Replaces one field of `date`, clamping the day when the year or month
    /// changes.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another
    /// calendar, `CalendarError::InvalidMonth` if the new year or month does
    /// not exist, or `CalendarError::InvalidDate` for a day out of range.
    pub fn set(&self, date: &CalendarDate, value: i32, field: DateField) -> Result<CalendarDate, CalendarError> {
        self.ensure_same(date)?;
        match field {
            DateField::Year => {
                self.checked_month(value, date.month())?;
            },
            DateField::Month => {
                self.checked_month(date.year(), value)?;
            },
            DateField::Day => {},
        }
        let ymd = engine::set(self.system(), date.ymd(), value, field);
        self.validate(ymd.year, ymd.month, ymd.day, InvalidKind::Date)
    }

    /// Orders two dates of this calendar by year, month of year, then day.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` if either date belongs to
    /// another calendar.
    pub fn compare(&self, a: &CalendarDate, b: &CalendarDate) -> Result<Ordering, CalendarError> {
        self.ensure_same(a)?;
        self.ensure_same(b)?;
        let key = |date: &CalendarDate| (date.year(), date.month_of_year(), date.day());
        Ok(key(a).cmp(&key(b)))
    }

    /// Renders `date` with `pattern`, or the locale's default pattern when
    /// `pattern` is `None` or empty.
    ///
    /// # Errors
    /// Returns `CalendarError::DifferentCalendars` for a date of another calendar.
    pub fn format_date(
        &self,
        date: &CalendarDate,
        pattern: Option<&str>,
        settings: &FormatSettings,
    ) -> Result<String, CalendarError> {
        self.ensure_same(date)?;
        let pattern = pattern
            .filter(|pattern| !pattern.is_empty())
            .unwrap_or(self.locale.date_format.as_str());
        Ok(format::render(self, date, pattern, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{astronomical, date, fiscal};

    #[test]
    fn test_calendar_kind_from_str() {
        assert_eq!("gregorian".parse::<CalendarKind>().unwrap(), CalendarKind::Gregorian);
        assert_eq!("Gregorian".parse::<CalendarKind>().unwrap(), CalendarKind::Gregorian);
        assert_eq!("".parse::<CalendarKind>().unwrap(), CalendarKind::Gregorian);
        assert_eq!(
            "mayan".parse::<CalendarKind>(),
            Err(CalendarError::InvalidCalendar("mayan".to_owned()))
        );
    }

    #[test]
    fn test_named() {
        let calendar = Calendar::named("gregorian", Some("english")).unwrap();
        assert_eq!(calendar.name(), "Gregorian");
        assert!(!calendar.has_year_zero());
        assert_eq!(calendar.locale().date_format, "mm/dd/yyyy");

        let fallback = Calendar::named("gregorian", Some("klingon")).unwrap();
        assert_eq!(fallback.locale(), calendar.locale());

        let unknown = Calendar::named("hebrew", None);
        assert!(matches!(unknown, Err(CalendarError::InvalidCalendar(ref name)) if name == "hebrew"));
    }

    #[test]
    fn test_new_with_missing_locale() {
        let result = Calendar::new(crate::test_utils::Unlocalized, None);
        assert!(matches!(result, Err(CalendarError::MissingLocale(ref owner)) if owner == "Unlocalized"));
    }

    #[test]
    fn test_new_date_validates() {
        let gregorian = Calendar::gregorian();
        assert!(gregorian.new_date(2024, 2, 29).is_ok());
        assert_eq!(
            gregorian.new_date(2023, 2, 29).unwrap_err(),
            CalendarError::InvalidDate {
                calendar: "Gregorian".to_owned()
            }
        );
        assert!(gregorian.new_date(0, 1, 1).is_err());
    }

    #[test]
    fn test_is_valid() {
        let gregorian = Calendar::gregorian();
        assert!(gregorian.is_valid(-1, 12, 31));
        assert!(!gregorian.is_valid(0, 6, 15));
        assert!(!gregorian.is_valid(2024, 13, 1));
        assert!(astronomical().is_valid(0, 6, 15));
    }

    #[test]
    fn test_validate_error_kind() {
        let gregorian = Calendar::gregorian();
        let calendar = "Gregorian".to_owned();
        assert_eq!(
            gregorian.validate(0, 1, 1, InvalidKind::Year).unwrap_err(),
            CalendarError::InvalidYear { calendar: calendar.clone() }
        );
        assert_eq!(
            gregorian.validate(2024, 14, 1, InvalidKind::Month).unwrap_err(),
            CalendarError::InvalidMonth { calendar }
        );
    }

    #[test]
    fn test_check_and_copy_reject_other_calendar() {
        let gregorian = Calendar::gregorian();
        let other = fiscal().new_date(2024, 3, 5).unwrap();

        let expected = CalendarError::DifferentCalendars {
            expected: "Gregorian".to_owned(),
            found:    "Fiscal".to_owned(),
        };
        assert_eq!(gregorian.check(&other).unwrap_err(), expected);
        assert_eq!(gregorian.copy_date(&other).unwrap_err(), expected);

        let own = date(2024, 3, 5);
        assert_eq!(gregorian.check(&own).unwrap(), &own);
        assert_eq!(gregorian.copy_date(&own).unwrap(), own);
    }

    #[test]
    fn test_convert_through_julian_day() {
        let gregorian = date(1, 1, 1);
        let converted = astronomical().convert(&gregorian).unwrap();
        assert_eq!(converted.calendar().name(), "Astronomical");
        assert_eq!((converted.year(), converted.month(), converted.day()), (1, 1, 1));

        let before = astronomical().convert(&date(-1, 12, 31)).unwrap();
        assert_eq!((before.year(), before.month(), before.day()), (0, 12, 31));
    }

    #[test]
    fn test_year_queries() {
        let gregorian = Calendar::gregorian();
        assert!(gregorian.leap_year(2024).unwrap());
        assert!(!gregorian.leap_year(1900).unwrap());
        assert_eq!(gregorian.days_in_year(2000).unwrap(), 366);
        assert_eq!(gregorian.days_in_year(2023).unwrap(), 365);
        assert_eq!(gregorian.months_in_year(2023).unwrap(), 12);
        assert_eq!(
            gregorian.leap_year(0).unwrap_err(),
            CalendarError::InvalidYear {
                calendar: "Gregorian".to_owned()
            }
        );
    }

    #[test]
    fn test_month_queries() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(
            gregorian.days_in_month(2024, 13).unwrap_err(),
            CalendarError::InvalidMonth {
                calendar: "Gregorian".to_owned()
            }
        );
        assert_eq!(fiscal().month_of_year(2024, 7).unwrap(), 1);
        assert_eq!(fiscal().from_month_of_year(2024, 1).unwrap(), 7);
        assert_eq!(gregorian.from_month_of_year(2024, 12).unwrap(), 12);
        for ordinal in [0, 13, i32::MAX, i32::MIN] {
            assert!(matches!(
                gregorian.from_month_of_year(2024, ordinal),
                Err(CalendarError::InvalidMonth { .. })
            ));
        }
    }

    #[test]
    fn test_day_queries() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.day_of_year(2024, 3, 5).unwrap(), 65);
        assert_eq!(gregorian.day_of_week(2024, 3, 5).unwrap(), 2);
        assert_eq!(gregorian.week_of_year(2021, 1, 1).unwrap(), 53);
        assert!(gregorian.week_day(2024, 3, 5).unwrap());
        assert!(!gregorian.week_day(2024, 3, 9).unwrap());
        assert_eq!(gregorian.days_in_week(), 7);
        assert!(gregorian.day_of_week(2024, 2, 30).is_err());
    }

    #[test]
    fn test_epoch_and_format_year() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.epoch(-44).unwrap(), "BCE");
        assert_eq!(gregorian.epoch(1).unwrap(), "CE");
        assert_eq!(gregorian.format_year(-44).unwrap(), "-0044");
        assert_eq!(gregorian.format_year(2024).unwrap(), "2024");
        assert!(gregorian.epoch(0).is_err());
    }

    #[test]
    fn test_to_jd() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.to_jd(2000, 1, 1).unwrap(), JulianDay::new(2_451_544.5));
        assert_eq!(gregorian.from_jd(JulianDay::new(2_451_544.5)).unwrap(), date(2000, 1, 1));
        assert!(gregorian.to_jd(2000, 2, 30).is_err());
    }

    #[test]
    fn test_from_jd_rejects_unnameable_days() {
        let gregorian = Calendar::gregorian();
        let invalid = CalendarError::InvalidDate {
            calendar: "Gregorian".to_owned(),
        };
        for jd in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e20, -1e20] {
            assert_eq!(gregorian.from_jd(JulianDay::new(jd)).unwrap_err(), invalid, "jd {jd}");
        }
    }

    #[test]
    fn test_from_jd_mid_day() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.from_jd(JulianDay::new(2_451_545.0)).unwrap(), date(2000, 1, 1));
        assert_eq!(gregorian.from_jd(JulianDay::new(2_451_545.49)).unwrap(), date(2000, 1, 1));
    }

    #[test]
    fn test_add_rejects_other_calendar() {
        let gregorian = Calendar::gregorian();
        let other = fiscal().new_date(2024, 3, 5).unwrap();
        assert!(matches!(
            gregorian.add(&other, 1, Period::Day),
            Err(CalendarError::DifferentCalendars { .. })
        ));
        assert!(matches!(
            gregorian.set(&other, 1, DateField::Day),
            Err(CalendarError::DifferentCalendars { .. })
        ));
    }

    #[test]
    fn test_set_validation() {
        let gregorian = Calendar::gregorian();
        let start = date(2024, 1, 31);
        assert_eq!(gregorian.set(&start, 2, DateField::Month).unwrap(), date(2024, 2, 29));
        assert!(matches!(
            gregorian.set(&start, 13, DateField::Month),
            Err(CalendarError::InvalidMonth { .. })
        ));
        assert!(matches!(
            gregorian.set(&start, 0, DateField::Year),
            Err(CalendarError::InvalidMonth { .. })
        ));
        assert!(matches!(
            gregorian.set(&date(2024, 2, 10), 30, DateField::Day),
            Err(CalendarError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_compare() {
        let gregorian = Calendar::gregorian();
        assert_eq!(gregorian.compare(&date(2024, 3, 5), &date(2024, 3, 6)).unwrap(), Ordering::Less);
        assert_eq!(gregorian.compare(&date(2025, 1, 1), &date(2024, 12, 31)).unwrap(), Ordering::Greater);
        assert_eq!(gregorian.compare(&date(-1, 1, 1), &date(1, 1, 1)).unwrap(), Ordering::Less);
        assert_eq!(gregorian.compare(&date(2024, 3, 5), &date(2024, 3, 5)).unwrap(), Ordering::Equal);

        // June closes the fiscal year
        let fiscal = fiscal();
        let june = fiscal.new_date(2024, 6, 1).unwrap();
        let july = fiscal.new_date(2024, 7, 1).unwrap();
        assert_eq!(fiscal.compare(&june, &july).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_different_calendars_for_every_pair() {
        let calendars = [Calendar::gregorian(), fiscal(), astronomical()];
        for owner in &calendars {
            for foreign in calendars.iter().filter(|other| !other.is_same(owner)) {
                let date = foreign.new_date(2024, 3, 5).unwrap();
                let own = owner.new_date(2024, 3, 5).unwrap();
                let expected = CalendarError::DifferentCalendars {
                    expected: owner.name().to_owned(),
                    found:    foreign.name().to_owned(),
                };
                assert_eq!(owner.compare(&own, &date).unwrap_err(), expected);
                assert_eq!(
                    owner.format_date(&date, None, &FormatSettings::default()).unwrap_err(),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_format_date_default_pattern() {
        let gregorian = Calendar::gregorian();
        let settings = FormatSettings::default();
        let day = date(2024, 3, 5);
        assert_eq!(gregorian.format_date(&day, None, &settings).unwrap(), "03/05/2024");
        assert_eq!(gregorian.format_date(&day, Some(""), &settings).unwrap(), "03/05/2024");
        assert_eq!(gregorian.format_date(&day, Some("yyyy"), &settings).unwrap(), "2024");
    }

    #[test]
    fn test_calendar_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + Clone>() {}
        assert_impl::<Calendar>();
        assert_impl::<CalendarDate>();
    }
}
