//! Parse and format HTTP dates, such as `Last-Modified` and
//! `If-Modified-Since` headers.
//!
//! All HTTP dates must be sent in the IMF-fixdate format:
//!
//! ```text
//! Sun, 06 Nov 1994 08:49:37 GMT
//! ```
//!
//! However, RFC 9110 states that recipients must also accept two obsolete
//! formats:
//!
//! ```text
//! Sunday, 06-Nov-94 08:49:37 GMT   ; rfc850-date
//! Sun Nov  6 08:49:37 1994         ; asctime-date
//! ```
//!
//! RFC 9110 criteria for the HTTP date field include the following:
//!
//! - It must be in one of the three accepted formats.
//! - It must represent time as an instance of UTC.
//! - It must represent weekday names and month names in English.
//! - It is case-sensitive.
//! - It must not have any additional whitespace.
//! - It must be semantically correct (eg, the weekday must be the correct
//!   weekday).
//! - It can include leap seconds (eg, `23:59:60`).
//! - It must represent a year of 1900 or above.
//!
//! It isn't stated explicitly in the RFCs, but a leap second is only
//! considered semantically correct here if it's an official leap second.
//!
//! ```
//! use httpdate::{httpdate_to_unixtime, is_valid_httpdate, unixtime_to_httpdate};
//!
//! assert!(is_valid_httpdate(Some("Sun, 06 Nov 1994 08:49:37 GMT")));
//! assert_eq!(
//!     httpdate_to_unixtime(Some("Sun, 06 Nov 1994 08:49:37 GMT")),
//!     Some(784111777)
//! );
//! assert_eq!(
//!     unixtime_to_httpdate(784111777).as_deref(),
//!     Some("Sun, 06 Nov 1994 08:49:37 GMT")
//! );
//! ```

mod calendar;
mod consts;
mod leap;
mod prelude;
mod types;

pub use consts::*;
pub use leap::LeapSecondTable;
pub use types::{Day, Month, Weekday, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A parsed, semantically correct HTTP date.
///
/// Always renders in the canonical IMF-fixdate form, whichever grammar it
/// was parsed from. Ordering is chronological; note that a leap second
/// (`23:59:60`) orders before the following midnight even though both
/// collapse to the same Unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{}, {} {} {} {:02}:{:02}:{:02} GMT",
    weekday,
    day,
    month,
    year,
    hour,
    minute,
    second
)]
pub struct HttpDate {
    year: Year,
    month: Month,
    day: Day,
    hour: u8,
    minute: u8,
    second: u8,
    weekday: Weekday,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty date string")]
    EmptyInput,
    #[error("Not an HTTP-date: {0}")]
    InvalidFormat(String),
    #[error("Invalid year: {0} (must be 1900-9999)")]
    InvalidYear(u16),
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),
    #[error("Invalid day {day} for {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u8),
    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u8),
    #[error("Invalid second: {0} (must be 0-60)")]
    InvalidSecond(u8),
    #[error("Weekday {stated} does not match the date (expected {expected})")]
    WeekdayMismatch { stated: Weekday, expected: Weekday },
    #[error("Not an official leap second (collapses to {0})")]
    InvalidLeapSecond(i64),
}

impl ParseError {
    /// Whether the input matched one of the three grammars but stated
    /// something that isn't true of the real calendar (wrong weekday,
    /// nonexistent day, unofficial leap second, out-of-range field).
    /// `false` means no grammar matched at all.
    pub fn is_semantic(&self) -> bool {
        !matches!(self, Self::EmptyInput | Self::InvalidFormat(_))
    }
}

impl HttpDate {
    /// Creates an `HttpDate` from raw fields, applying the full semantic
    /// validation: field ranges, day-of-month validity, weekday
    /// consistency, official-leap-second membership for `second == 60`,
    /// and the RFC 9110 year floor.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first failed check.
    pub fn new(
        year: u16,
        month: Month,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        weekday: Weekday,
    ) -> Result<Self, ParseError> {
        if hour > MAX_HOUR {
            return Err(ParseError::InvalidHour(hour));
        }
        if minute > MAX_MINUTE {
            return Err(ParseError::InvalidMinute(minute));
        }
        if second > MAX_SECOND {
            return Err(ParseError::InvalidSecond(second));
        }

        let day = Day::new(day, year, month)?;

        // RFC 5322, Section 3.3: "day-of-week MUST be the day implied by
        // the date".
        let days = calendar::days_from_civil(i64::from(year), month.number(), day.get());
        let expected = calendar::weekday_from_days(days);
        if weekday != expected {
            return Err(ParseError::WeekdayMismatch {
                stated: weekday,
                expected,
            });
        }

        // A :60 reading is only semantically correct at an official leap
        // second.
        if second == MAX_SECOND {
            let collapsed = calendar::unixtime_from_fields(
                i64::from(year),
                month.number(),
                day.get(),
                hour,
                minute,
                second,
            );
            if !LeapSecondTable::official().contains(collapsed) {
                return Err(ParseError::InvalidLeapSecond(collapsed));
            }
        }

        let year = Year::new(year)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
        })
    }

    /// Parses an HTTP date with an explicit "now" (a Unix timestamp) used
    /// for the rfc850-date two-digit-year window.
    ///
    /// RFC 9110 says a two-digit year is from the current century unless
    /// that would place the date more than 50 years in the future; then
    /// the previous century applies. `FromStr` feeds the system clock in
    /// here; tests pin `now` to make the window deterministic.
    ///
    /// ```
    /// use httpdate::HttpDate;
    ///
    /// // With "now" fixed at 2020-01-01T00:00:00Z, 94 expands to 1994.
    /// let date = HttpDate::parse_at("Sunday, 06-Nov-94 08:49:37 GMT", 1577836800).unwrap();
    /// assert_eq!(date.to_unixtime(), 784111777);
    /// ```
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` (or `EmptyInput`) if no grammar
    /// matches, otherwise the first failed semantic check.
    pub fn parse_at(s: &str, now: i64) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        // All three grammars are pure ASCII; rejecting anything else up
        // front keeps the fixed-offset slicing below on char boundaries.
        if !s.is_ascii() {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }

        let raw = parse_imf_fixdate(s)
            .or_else(|| parse_rfc850_date(s, now))
            .or_else(|| parse_asctime_date(s))
            .ok_or_else(|| ParseError::InvalidFormat(s.to_owned()))?;

        Self::new(
            raw.year, raw.month, raw.day, raw.hour, raw.minute, raw.second, raw.weekday,
        )
    }

    /// Converts a Unix timestamp into an `HttpDate`.
    ///
    /// Returns `None` if the timestamp falls outside
    /// `MIN_UNIXTIME..=MAX_UNIXTIME` (1900-01-01T00:00:00Z through
    /// 9999-12-31T23:59:59Z), the window a four-digit RFC 9110 date can
    /// express.
    pub fn from_unixtime(unixtime: i64) -> Option<Self> {
        if !(MIN_UNIXTIME..=MAX_UNIXTIME).contains(&unixtime) {
            return None;
        }

        let civil = calendar::civil_datetime_from_unixtime(unixtime);
        let year = u16::try_from(civil.year).ok()?;
        let month = Month::from_number(civil.month).ok()?;

        Some(Self {
            year: Year::new(year).ok()?,
            month,
            day: Day::new(civil.day, year, month).ok()?,
            hour: civil.hour,
            minute: civil.minute,
            second: civil.second,
            weekday: civil.weekday,
        })
    }

    /// Converts to a Unix timestamp.
    ///
    /// A leap second (`23:59:60`) yields the same timestamp as `00:00:00`
    /// of the following day. RFC 9110 says the two readings should be
    /// interpreted as identical, so the mapping is deliberately lossy.
    pub fn to_unixtime(&self) -> i64 {
        calendar::unixtime_from_fields(
            i64::from(self.year.get()),
            self.month.number(),
            self.day.get(),
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Returns the year (1900..=9999)
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the month
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of month
    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns the hour (0..=23)
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59)
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=60; 60 only for an official leap second)
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns the weekday implied by the date
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}

impl FromStr for HttpDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_at(s, now_unixtime())
    }
}

impl Serialize for HttpDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HttpDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Check if an HTTP date field (eg, `Last-Modified`) is valid.
///
/// Returns `false` if the input is `None`, malformed, or semantically
/// incorrect.
pub fn is_valid_httpdate(httpdate: Option<&str>) -> bool {
    httpdate_to_unixtime(httpdate).is_some()
}

/// Parse an HTTP date (eg, `Last-Modified`) into a Unix timestamp.
///
/// Returns `None` if the input is `None` or not a valid HTTP date. Callers
/// that need to know why an input was rejected can parse an [`HttpDate`]
/// directly and inspect the [`ParseError`].
pub fn httpdate_to_unixtime(httpdate: Option<&str>) -> Option<i64> {
    let httpdate = httpdate?;
    httpdate
        .parse::<HttpDate>()
        .ok()
        .map(|date| date.to_unixtime())
}

/// Format a Unix timestamp as an HTTP date (eg, for an `If-Modified-Since`
/// header), in the IMF-fixdate format RFC 9110 requires senders to use.
///
/// Returns `None` if the timestamp falls outside
/// `MIN_UNIXTIME..=MAX_UNIXTIME`.
pub fn unixtime_to_httpdate(unixtime: i64) -> Option<String> {
    HttpDate::from_unixtime(unixtime).map(|date| date.to_string())
}

fn now_unixtime() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
        Err(err) => -i64::try_from(err.duration().as_secs()).unwrap_or(i64::MAX),
    }
}

/// Field set extracted by one of the grammar tokenizers, before semantic
/// validation. All three grammars funnel into this shape so the calendar
/// checks live in one place.
struct RawDate {
    weekday: Weekday,
    day: u8,
    month: Month,
    year: u16,
    hour: u8,
    minute: u8,
    second: u8,
}

/// `Sun, 06 Nov 1994 08:49:37 GMT` (fixed 29 bytes)
fn parse_imf_fixdate(s: &str) -> Option<RawDate> {
    let b = s.as_bytes();
    if b.len() != 29 || !s.ends_with(GMT) {
        return None;
    }

    let weekday = Weekday::from_abbrev(&s[0..3])?;
    if &s[3..5] != ", " {
        return None;
    }
    let day = two_digits(&s[5..7])?;
    if b[7] != b' ' {
        return None;
    }
    let month = Month::from_abbrev(&s[8..11])?;
    if b[11] != b' ' {
        return None;
    }
    let year = four_digits(&s[12..16])?;
    if b[16] != b' ' {
        return None;
    }
    let (hour, minute, second) = hour_minute_second(&s[17..25])?;
    if b[25] != b' ' {
        return None;
    }

    Some(RawDate {
        weekday,
        day,
        month,
        year,
        hour,
        minute,
        second,
    })
}

/// `Sunday, 06-Nov-94 08:49:37 GMT` (full weekday name, then fixed 22
/// bytes). The two-digit year is widened against `now` (see
/// [`HttpDate::parse_at`]).
fn parse_rfc850_date(s: &str, now: i64) -> Option<RawDate> {
    let (weekday_name, rest) = s.split_once(", ")?;
    let weekday = Weekday::from_full_name(weekday_name)?;

    let b = rest.as_bytes();
    if b.len() != 22 || !rest.ends_with(GMT) {
        return None;
    }

    let day = two_digits(&rest[0..2])?;
    if b[2] != b'-' {
        return None;
    }
    let month = Month::from_abbrev(&rest[3..6])?;
    if b[6] != b'-' {
        return None;
    }
    let short_year = two_digits(&rest[7..9])?;
    if b[9] != b' ' {
        return None;
    }
    let (hour, minute, second) = hour_minute_second(&rest[10..18])?;
    if b[18] != b' ' {
        return None;
    }

    let year = expand_rfc850_year(short_year, month, day, hour, minute, second, now);

    Some(RawDate {
        weekday,
        day,
        month,
        year,
        hour,
        minute,
        second,
    })
}

/// `Sun Nov  6 08:49:37 1994` (fixed 24 bytes, no zone literal, day of
/// month right-justified in a two-character field)
fn parse_asctime_date(s: &str) -> Option<RawDate> {
    let b = s.as_bytes();
    if b.len() != 24 {
        return None;
    }

    let weekday = Weekday::from_abbrev(&s[0..3])?;
    if b[3] != b' ' {
        return None;
    }
    let month = Month::from_abbrev(&s[4..7])?;
    if b[7] != b' ' {
        return None;
    }
    let day = space_padded_day(&s[8..10])?;
    if b[10] != b' ' {
        return None;
    }
    let (hour, minute, second) = hour_minute_second(&s[11..19])?;
    if b[19] != b' ' {
        return None;
    }
    let year = four_digits(&s[20..24])?;

    Some(RawDate {
        weekday,
        day,
        month,
        year,
        hour,
        minute,
        second,
    })
}

/// Applies the RFC 9110 sliding window to an rfc850-date two-digit year:
/// assume the century anchored at `now` (floored to 1900), unless the
/// stated date-time would land more than 50 years in the future.
fn expand_rfc850_year(
    short_year: u8,
    month: Month,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    now: i64,
) -> u16 {
    let now_civil = calendar::civil_datetime_from_unixtime(now);
    let anchor_year = now_civil.year.max(i64::from(MIN_YEAR));
    let candidate = (anchor_year / 100) * 100 + i64::from(short_year);

    let stated = (candidate, month.number(), day, hour, minute, second);
    let horizon = (
        anchor_year + RFC850_FUTURE_WINDOW_YEARS,
        now_civil.month,
        now_civil.day,
        now_civil.hour,
        now_civil.minute,
        now_civil.second,
    );

    let year = if stated > horizon {
        candidate - 100
    } else {
        candidate
    };
    // An expansion that can't fit u16 (absurd `now`) collapses to 0 and is
    // rejected as an invalid year downstream.
    u16::try_from(year).unwrap_or(0)
}

fn two_digits(s: &str) -> Option<u8> {
    let b = s.as_bytes();
    if b.len() == 2 && b[0].is_ascii_digit() && b[1].is_ascii_digit() {
        Some((b[0] - b'0') * 10 + (b[1] - b'0'))
    } else {
        None
    }
}

fn four_digits(s: &str) -> Option<u16> {
    let b = s.as_bytes();
    if b.len() == 4 && b.iter().all(u8::is_ascii_digit) {
        Some(
            u16::from(b[0] - b'0') * 1000
                + u16::from(b[1] - b'0') * 100
                + u16::from(b[2] - b'0') * 10
                + u16::from(b[3] - b'0'),
        )
    } else {
        None
    }
}

/// `HH:MM:SS`, exact widths and separators
fn hour_minute_second(s: &str) -> Option<(u8, u8, u8)> {
    let b = s.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b':' {
        return None;
    }
    Some((
        two_digits(&s[0..2])?,
        two_digits(&s[3..5])?,
        two_digits(&s[6..8])?,
    ))
}

/// Day of month in a two-character field: `" 6"` or `"06"` or `"16"`
fn space_padded_day(s: &str) -> Option<u8> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    match (b[0], b[1]) {
        (b' ', units) if units.is_ascii_digit() => Some(units - b'0'),
        (tens, units) if tens.is_ascii_digit() && units.is_ascii_digit() => {
            Some((tens - b'0') * 10 + (units - b'0'))
        }
        _ => None,
    }
}
