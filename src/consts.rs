/// Minimum year accepted by RFC 9110 (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum year representable in a four-digit date field (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Jan 1st, 1900, 00:00:00 UTC, the earliest instant RFC 9110 can express
pub const MIN_UNIXTIME: i64 = -2_208_988_800;

/// Dec 31st, 9999, 23:59:59 UTC, the latest instant a four-digit year can express
pub const MAX_UNIXTIME: i64 = 253_402_300_799;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum valid hour of day
pub const MAX_HOUR: u8 = 23;

/// Maximum valid minute of hour
pub const MAX_MINUTE: u8 = 59;

/// Maximum valid second of minute; `60` is only accepted as an official
/// leap second
pub const MAX_SECOND: u8 = 60;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

pub(crate) const SECS_PER_MINUTE: i64 = 60;
pub(crate) const SECS_PER_HOUR: i64 = 3_600;
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// RFC 9110: an rfc850-date that appears more than 50 years in the future
/// must be interpreted as the most recent past year with the same last two
/// digits
pub(crate) const RFC850_FUTURE_WINDOW_YEARS: i64 = 50;

/// Time zone literal required by IMF-fixdate and rfc850-date
pub const GMT: &str = "GMT";
