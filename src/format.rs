//! Pattern-based date rendering.
//!
//! | token      | output                                             |
//! |------------|----------------------------------------------------|
//! | `d` `dd`   | day of month, `dd` zero-padded to 2                |
//! | `D` `DD`   | weekday name, short or long                        |
//! | `o` `oo`   | day of year, `oo` zero-padded to 3                 |
//! | `w` `ww`   | week of year, `ww` zero-padded to 2                |
//! | `m` `mm`   | month number, `mm` zero-padded to 2                |
//! | `M` `MM`   | month name, short or long                          |
//! | `y` `yy`   | two-digit year; `yyyy` is the full year            |
//! | `YYYY`     | signed year zero-padded to 4; shorter runs print nothing |
//! | `E`        | epoch designator                                   |
//! | `J`        | Julian Day                                         |
//! | `@`        | Unix seconds                                       |
//! | `!`        | 100ns ticks since 0001-01-01                       |
//! | `'...'`    | literal text, `''` is one quote                    |

use crate::calendar::Calendar;
use crate::consts::{SECS_PER_DAY, TICKS_EPOCH, TICKS_PER_DAY, UNIX_EPOCH};
use crate::date::CalendarDate;
use crate::types::JulianDay;
use serde::Deserialize;

/// Caller overrides for a single format call. `None` keeps the locale value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatSettings {
    pub day_names_short:   Option<Vec<String>>,
    pub day_names:         Option<Vec<String>>,
    pub month_names_short: Option<Vec<String>>,
    pub month_names:       Option<Vec<String>>,
    /// Substitute the locale's digit glyphs
    pub local_numbers:     Option<bool>,
}

/// Signed year padded to at least four digits, e.g. `-0044`
pub(crate) fn format_year(year: i32) -> String {
    let sign = if year < 0 { "-" } else { "" };
    format!("{sign}{:04}", year.unsigned_abs())
}

/// Walks the pattern one character at a time.
struct Scanner {
    chars: Vec<char>,
    pos:   usize,
}

impl Scanner {
    fn new(pattern: &str) -> Self {
        Self {
            chars: pattern.chars().collect(),
            pos:   0,
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        Some(ch)
    }

    /// Consumes the rest of a run of `ch` and reports whether the run,
    /// counted in units of `step`, is longer than one.
    fn doubled(&mut self, ch: char, step: usize) -> bool {
        let mut run = 1;
        while self.chars.get(self.pos) == Some(&ch) {
            run += 1;
            self.pos += 1;
        }
        run / step > 1
    }
}

fn pad(value: i32, width: usize, doubled: bool) -> String {
    if doubled { format!("{value:0width$}") } else { value.to_string() }
}

fn name(names: &[String], index: i32) -> &str {
    usize::try_from(index)
        .ok()
        .and_then(|index| names.get(index))
        .map_or("", String::as_str)
}

fn localise(text: &str, digits: Option<&[char; 10]>) -> String {
    let Some(digits) = digits else {
        return text.to_owned();
    };
    text.chars()
        .map(|ch| {
            ch.to_digit(10)
                .and_then(|digit| usize::try_from(digit).ok())
                .map_or(ch, |digit| digits[digit])
        })
        .collect()
}

#[allow(clippy::cast_possible_truncation)]
fn whole_days_since(jd: JulianDay, epoch: f64) -> i64 {
    (jd.get() - epoch).round() as i64
}

/// Renders `date` with `pattern` using the names of `calendar`'s locale.
pub(crate) fn render(calendar: &Calendar, date: &CalendarDate, pattern: &str, settings: &FormatSettings) -> String {
    let locale = calendar.locale();
    let day_names_short = settings.day_names_short.as_deref().unwrap_or(&locale.day_names_short);
    let day_names = settings.day_names.as_deref().unwrap_or(&locale.day_names);
    let month_names_short = settings.month_names_short.as_deref().unwrap_or(&locale.month_names_short);
    let month_names = settings.month_names.as_deref().unwrap_or(&locale.month_names);
    let digits = settings
        .local_numbers
        .unwrap_or(locale.local_numbers)
        .then_some(locale.digits.as_ref())
        .flatten();

    let mut scanner = Scanner::new(pattern);
    let mut output = String::with_capacity(pattern.len() * 2);
    let mut literal = false;

    while let Some(ch) = scanner.advance() {
        if literal {
            if ch == '\'' && !scanner.doubled('\'', 1) {
                literal = false;
            } else {
                output.push(ch);
            }
            continue;
        }
        match ch {
            'd' => output.push_str(&localise(&pad(date.day(), 2, scanner.doubled('d', 1)), digits)),
            'D' => {
                let names = if scanner.doubled('D', 1) { day_names } else { day_names_short };
                output.push_str(name(names, date.day_of_week()));
            },
            'o' => output.push_str(&localise(&pad(date.day_of_year(), 3, scanner.doubled('o', 1)), digits)),
            'w' => output.push_str(&localise(&pad(date.week_of_year(), 2, scanner.doubled('w', 1)), digits)),
            'm' => output.push_str(&localise(&pad(date.month(), 2, scanner.doubled('m', 1)), digits)),
            'M' => {
                let names = if scanner.doubled('M', 1) { month_names } else { month_names_short };
                output.push_str(name(names, date.month() - calendar.min_month()));
            },
            'y' => {
                let year = if scanner.doubled('y', 2) {
                    date.year().to_string()
                } else {
                    format!("{:02}", date.year().unsigned_abs() % 100)
                };
                output.push_str(&localise(&year, digits));
            },
            'Y' => {
                if scanner.doubled('Y', 2) {
                    output.push_str(&localise(&format_year(date.year()), digits));
                }
            },
            'E' => output.push_str(locale.epoch(date.year())),
            'J' => output.push_str(&date.to_jd().to_string()),
            '@' => {
                let seconds = whole_days_since(date.to_jd(), UNIX_EPOCH) * SECS_PER_DAY;
                output.push_str(&seconds.to_string());
            },
            '!' => {
                let ticks = i128::from(whole_days_since(date.to_jd(), TICKS_EPOCH)) * i128::from(TICKS_PER_DAY);
                output.push_str(&ticks.to_string());
            },
            '\'' => {
                if scanner.doubled('\'', 1) {
                    output.push('\'');
                } else {
                    literal = true;
                }
            },
            other => output.push(other),
        }
    }
    output
}
