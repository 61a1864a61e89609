//! Localisation tables: names, default pattern, digit glyphs and error
//! message templates, selected per language.

use crate::CalendarError;
use serde::{Deserialize, Serialize};

/// Per-language presentation data for one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    /// Designators for negative and positive years, in that order
    pub epochs:            [String; 2],
    pub month_names:       Vec<String>,
    pub month_names_short: Vec<String>,
    /// Starting from the calendar's day 0
    pub day_names:         Vec<String>,
    pub day_names_short:   Vec<String>,
    /// Glyphs substituted for `0`..=`9`
    #[serde(default)]
    pub digits:            Option<[char; 10]>,
    /// Whether formatting substitutes `digits` by default
    #[serde(default)]
    pub local_numbers:     bool,
    pub date_format:       String,
    #[serde(default)]
    pub messages:          Messages,
}

impl Locale {
    /// Epoch designator for a year
    pub fn epoch(&self, year: i32) -> &str {
        if year < 0 { &self.epochs[0] } else { &self.epochs[1] }
    }
}

/// Error message templates with `{0}`..`{4}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Messages {
    pub invalid_calendar:    String,
    pub invalid_date:        String,
    pub invalid_month:       String,
    pub invalid_year:        String,
    pub different_calendars: String,
    pub invalid_arguments:   String,
    pub missing_locale:      String,
    pub out_of_range:        String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_calendar:    "Calendar {0} not found".to_owned(),
            invalid_date:        "Invalid {0} date".to_owned(),
            invalid_month:       "Invalid {0} month".to_owned(),
            invalid_year:        "Invalid {0} year".to_owned(),
            different_calendars: "Cannot mix {0} and {1} dates".to_owned(),
            invalid_arguments:   "Invalid arguments".to_owned(),
            missing_locale:      "Regional Options is missing from {0}".to_owned(),
            out_of_range:        "Julian day {0} is outside the platform date range".to_owned(),
        }
    }
}

/// Locales of one calendar, keyed by language, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionalOptions {
    entries: Vec<(String, Locale)>,
}

impl RegionalOptions {
    /// Adds or replaces the locale for `language`
    pub fn insert(&mut self, language: impl Into<String>, locale: Locale) {
        let language = language.into();
        match self.entries.iter_mut().find(|(name, _)| *name == language) {
            Some((_, existing)) => *existing = locale,
            None => self.entries.push((language, locale)),
        }
    }

    pub fn get(&self, language: &str) -> Option<&Locale> {
        self.entries
            .iter()
            .find_map(|(name, locale)| (name == language).then_some(locale))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks the requested language, falling back to the first one declared.
    ///
    /// # Errors
    /// Returns `CalendarError::MissingLocale` naming `owner` if no locale is
    /// declared at all.
    pub fn select(&self, language: Option<&str>, owner: &str) -> Result<&Locale, CalendarError> {
        if let Some(locale) = language.and_then(|language| self.get(language)) {
            return Ok(locale);
        }
        let (fallback, locale) = self
            .entries
            .first()
            .ok_or_else(|| CalendarError::MissingLocale(owner.to_owned()))?;
        if let Some(language) = language {
            tracing::debug!(
                calendar = owner,
                requested = language,
                fallback = %fallback,
                "locale not found, using fallback"
            );
        }
        Ok(locale)
    }
}

impl<L: Into<String>> FromIterator<(L, Locale)> for RegionalOptions {
    fn from_iter<I: IntoIterator<Item = (L, Locale)>>(iter: I) -> Self {
        let mut options = Self::default();
        for (language, locale) in iter {
            options.insert(language, locale);
        }
        options
    }
}

/// Substitutes `{0}`..`{4}` with `args`. Placeholders without a matching
/// argument, and arguments past the fifth, are left alone.
pub fn replace_placeholders(template: &str, args: &[&str]) -> String {
    args.iter()
        .take(5)
        .enumerate()
        .fold(template.to_owned(), |text, (index, arg)| {
            text.replace(&format!("{{{index}}}"), arg)
        })
}
