//! Proleptic Gregorian day arithmetic anchored at the Unix epoch.
//!
//! Era-based civil-date conversions; every function is pure integer math
//! over `i64`, valid for dates far outside the range the crate accepts, so
//! range policy stays in the callers.

use crate::consts::{SECS_PER_DAY, SECS_PER_HOUR, SECS_PER_MINUTE};
use crate::types::Weekday;

/// Days between 0000-03-01 and 1970-01-01
const EPOCH_SHIFT_DAYS: i64 = 719_468;
/// Days in one 400-year Gregorian era
const DAYS_PER_ERA: i64 = 146_097;
/// Years in one Gregorian era
const YEARS_PER_ERA: i64 = 400;

/// Days since 1970-01-01 for a civil date. Month is 1..=12, day 1..=31;
/// the caller has already validated both.
pub(crate) const fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let month = month as i64;
    let day = day as i64;

    // Shift the year so it starts on March 1st, putting the leap day last.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(YEARS_PER_ERA);
    let year_of_era = year - era * YEARS_PER_ERA;

    let month_shifted = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * month_shifted + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT_DAYS
}

/// Civil (year, month, day) for a count of days since 1970-01-01
pub(crate) const fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let shifted = days + EPOCH_SHIFT_DAYS;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted - era * DAYS_PER_ERA;

    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_shifted = (5 * day_of_year + 2) / 153;

    let day = (day_of_year - (153 * month_shifted + 2) / 5 + 1) as u8;
    let month = if month_shifted < 10 {
        (month_shifted + 3) as u8
    } else {
        (month_shifted - 9) as u8
    };
    let year = year_of_era + era * YEARS_PER_ERA + if month <= 2 { 1 } else { 0 };

    (year, month, day)
}

/// Weekday for a count of days since 1970-01-01 (which was a Thursday)
pub(crate) const fn weekday_from_days(days: i64) -> Weekday {
    match (days + 3).rem_euclid(7) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}

/// Unix timestamp for a civil date-time. A second of 60 rolls into the
/// first second of the following minute, so a leap second collapses onto
/// the instant after it.
pub(crate) const fn unixtime_from_fields(
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
) -> i64 {
    days_from_civil(year, month, day) * SECS_PER_DAY
        + hour as i64 * SECS_PER_HOUR
        + minute as i64 * SECS_PER_MINUTE
        + second as i64
}

/// A Unix timestamp broken down into UTC civil fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CivilDateTime {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub weekday: Weekday,
}

pub(crate) const fn civil_datetime_from_unixtime(unixtime: i64) -> CivilDateTime {
    let days = unixtime.div_euclid(SECS_PER_DAY);
    let secs_of_day = unixtime.rem_euclid(SECS_PER_DAY);

    let (year, month, day) = civil_from_days(days);

    CivilDateTime {
        year,
        month,
        day,
        hour: (secs_of_day / SECS_PER_HOUR) as u8,
        minute: (secs_of_day % SECS_PER_HOUR / SECS_PER_MINUTE) as u8,
        second: (secs_of_day % SECS_PER_MINUTE) as u8,
        weekday: weekday_from_days(days),
    }
}
