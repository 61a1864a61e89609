/// Number of days in a week, identical for every supported calendar
pub const DAYS_IN_WEEK: i32 = 7;

/// Month number for February
pub const FEBRUARY: i32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i32 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [i32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Julian Day of the UNIX epoch, 1970-01-01 00:00 UTC
pub const UNIX_EPOCH: f64 = 2_440_587.5;
/// Seconds per day
pub const SECS_PER_DAY: i64 = 86_400;

/// Julian Day of 0001-01-01 00:00, the origin of platform ticks
pub const TICKS_EPOCH: f64 = 1_721_425.5;
/// 100ns ticks per day
pub const TICKS_PER_DAY: i64 = 864_000_000_000;

/// Language selected when the caller does not ask for one
pub const DEFAULT_LANGUAGE: &str = "english";
