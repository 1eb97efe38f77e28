use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`
/// (1900..=9999), the window RFC 9110 date fields can express.
/// Uses `NonZeroU16` internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is < `MIN_YEAR` or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A calendar month with its canonical English name.
///
/// HTTP dates carry months as case-sensitive three-letter abbreviations
/// (`Jan`..`Dec`); the numeric value (1..=12) is the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Returns the month number (1..=12)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the three-letter English abbreviation, e.g. `"Nov"`
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    /// Looks up a month by its abbreviation. Case-sensitive: `"nov"` and
    /// `"NOV"` are not recognized.
    pub fn from_abbrev(name: &str) -> Option<Self> {
        match name {
            "Jan" => Some(Self::January),
            "Feb" => Some(Self::February),
            "Mar" => Some(Self::March),
            "Apr" => Some(Self::April),
            "May" => Some(Self::May),
            "Jun" => Some(Self::June),
            "Jul" => Some(Self::July),
            "Aug" => Some(Self::August),
            "Sep" => Some(Self::September),
            "Oct" => Some(Self::October),
            "Nov" => Some(Self::November),
            "Dec" => Some(Self::December),
            _ => None,
        }
    }

    /// Looks up a month by number (1..=12)
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > 12.
    pub fn from_number(value: u8) -> Result<Self, ParseError> {
        match value {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(ParseError::InvalidMonth(value)),
        }
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A day of the week with its canonical English names.
///
/// IMF-fixdate and asctime-date carry the abbreviated name (`Sun`);
/// rfc850-date carries the full name (`Sunday`). Monday is 0, matching the
/// day-count arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Monday = 0,
    Tuesday = 1,
    Wednesday = 2,
    Thursday = 3,
    Friday = 4,
    Saturday = 5,
    Sunday = 6,
}

impl Weekday {
    /// Returns the weekday index (0 = Monday .. 6 = Sunday)
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the three-letter English abbreviation, e.g. `"Sun"`
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Returns the full English name, e.g. `"Sunday"`
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// Looks up a weekday by its abbreviation. Case-sensitive.
    pub fn from_abbrev(name: &str) -> Option<Self> {
        match name {
            "Mon" => Some(Self::Monday),
            "Tue" => Some(Self::Tuesday),
            "Wed" => Some(Self::Wednesday),
            "Thu" => Some(Self::Thursday),
            "Fri" => Some(Self::Friday),
            "Sat" => Some(Self::Saturday),
            "Sun" => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Looks up a weekday by its full name. Case-sensitive.
    pub fn from_full_name(name: &str) -> Option<Self> {
        match name {
            "Monday" => Some(Self::Monday),
            "Tuesday" => Some(Self::Tuesday),
            "Wednesday" => Some(Self::Wednesday),
            "Thursday" => Some(Self::Thursday),
            "Friday" => Some(Self::Friday),
            "Saturday" => Some(Self::Saturday),
            "Sunday" => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: Month) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            year,
            month: month.number(),
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(ParseError::InvalidDay {
                year,
                month: month.number(),
                day: value,
            });
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check minimum
        if value < MIN_DAY {
            return Err(ParseError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        // Since we validated value >= MIN_DAY (which is 1), value is non-zero
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidDay {
            year: 0,
            month: 0,
            day: value,
        })?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: Month) -> u8 {
    if month.number() == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.number() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1900).is_ok());
        assert!(Year::new(1994).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_below_rfc_minimum() {
        let result = Year::new(1899);
        assert!(matches!(result, Err(ParseError::InvalidYear(1899))));

        let result = Year::new(0);
        assert!(matches!(result, Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(ParseError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_get() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.get(), 2024);
    }

    #[test]
    fn test_year_display_zero_padded() {
        let year = Year::new(2024).unwrap();
        assert_eq!(year.to_string(), "2024");
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 2024.try_into().unwrap();
        assert_eq!(year.get(), 2024);

        let result: Result<Year, _> = 1899.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_u16() {
        let year = Year::new(2024).unwrap();
        let value: u16 = year.into();
        assert_eq!(value, 2024);
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1994).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1994");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("1899");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_numbers() {
        assert_eq!(Month::January.number(), 1);
        assert_eq!(Month::December.number(), 12);

        for n in 1..=12 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn test_month_from_number_invalid() {
        assert!(matches!(
            Month::from_number(0),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            Month::from_number(13),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_abbrev_round_trip() {
        for n in 1..=12 {
            let month = Month::from_number(n).unwrap();
            assert_eq!(Month::from_abbrev(month.abbrev()), Some(month));
        }
    }

    #[test]
    fn test_month_abbrev_case_sensitive() {
        assert_eq!(Month::from_abbrev("Nov"), Some(Month::November));
        assert_eq!(Month::from_abbrev("nov"), None);
        assert_eq!(Month::from_abbrev("NOV"), None);
        assert_eq!(Month::from_abbrev("November"), None);
        assert_eq!(Month::from_abbrev("Nvv"), None);
    }

    #[test]
    fn test_month_display() {
        assert_eq!(Month::November.to_string(), "Nov");
        assert_eq!(Month::May.to_string(), "May");
    }

    #[test]
    fn test_month_ordering() {
        assert!(Month::January < Month::February);
        assert!(Month::November < Month::December);
    }

    #[test]
    fn test_month_serde() {
        let month = Month::November;
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "11");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_weekday_numbers() {
        assert_eq!(Weekday::Monday.number(), 0);
        assert_eq!(Weekday::Sunday.number(), 6);
    }

    #[test]
    fn test_weekday_abbrev_round_trip() {
        for weekday in [
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
            Weekday::Sunday,
        ] {
            assert_eq!(Weekday::from_abbrev(weekday.abbrev()), Some(weekday));
            assert_eq!(Weekday::from_full_name(weekday.full_name()), Some(weekday));
        }
    }

    #[test]
    fn test_weekday_name_case_sensitive() {
        assert_eq!(Weekday::from_abbrev("Sun"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_abbrev("sun"), None);
        assert_eq!(Weekday::from_abbrev("SUN"), None);
        assert_eq!(Weekday::from_full_name("Sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_full_name("sunday"), None);
        assert_eq!(Weekday::from_full_name("Snnday"), None);
    }

    #[test]
    fn test_weekday_names_not_interchangeable() {
        // The abbreviated and full name tables are distinct lookups
        assert_eq!(Weekday::from_abbrev("Sunday"), None);
        assert_eq!(Weekday::from_full_name("Sun"), None);
    }

    #[test]
    fn test_weekday_display() {
        assert_eq!(Weekday::Sunday.to_string(), "Sun");
        assert_eq!(Weekday::Wednesday.to_string(), "Wed");
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, Month::January).is_ok());
        assert!(Day::new(31, 2024, Month::January).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, Month::February).is_ok());
        assert!(Day::new(29, 2023, Month::February).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, Month::February).is_ok());
        assert!(Day::new(30, 2024, Month::February).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, Month::April).is_ok());
        assert!(Day::new(31, 2024, Month::April).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 2024, Month::January);
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        // 32 is invalid for January
        let result = Day::new(32, 2024, Month::January);
        assert!(matches!(
            result,
            Err(ParseError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32,
            })
        ));
    }

    #[test]
    fn test_day_get() {
        let day = Day::new(15, 2024, Month::August).unwrap();
        assert_eq!(day.get(), 15);
    }

    #[test]
    fn test_day_display_zero_padded() {
        let day = Day::new(6, 1994, Month::November).unwrap();
        assert_eq!(day.to_string(), "06");

        let day = Day::new(15, 2024, Month::August).unwrap();
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_try_from_u8() {
        // Valid day (context-free validation)
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        // Zero is invalid
        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, 2024, Month::August).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 1994,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [
            Month::January,
            Month::March,
            Month::May,
            Month::July,
            Month::August,
            Month::October,
            Month::December,
        ] {
            assert_eq!(
                days_in_month(2024, month),
                31,
                "{month} should have 31 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in [Month::April, Month::June, Month::September, Month::November] {
            assert_eq!(
                days_in_month(2024, month),
                30,
                "{month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(
            days_in_month(1900, Month::February),
            28,
            "Century year not divisible by 400"
        );
        assert_eq!(
            days_in_month(2000, Month::February),
            29,
            "Century year divisible by 400"
        );
    }
}
