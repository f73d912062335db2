use crate::DateError;
use crate::consts::{
    DAYS_IN_REGULAR_MONTH, LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER, MAX_MONTH, MAX_YEAR, PAGUME,
    PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// An Ethiopian year guaranteed to be in the range `1..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let non_zero = NonZeroU16::new(value).ok_or(DateError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether Pagume has 6 days in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_ethiopian_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

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
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=13,
/// where 13 is Pagume). Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Whether this is Pagume, the short intercalary month
    #[inline]
    pub const fn is_pagume(self) -> bool {
        self.get() == PAGUME
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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
    /// Returns `DateError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
            year,
            month,
            day: value,
        })?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(DateError::InvalidDay {
                year,
                month,
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
    type Error = DateError;

    // Context-free validation against the 30-day ceiling. The Gregorian
    // conversion builds days through this path: its fixed September 11
    // epoch can land on Pagume 6 in a common year, which the contextual
    // `new` would reject.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > DAYS_IN_REGULAR_MONTH {
            return Err(DateError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            });
        }
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidDay {
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
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// The Ethiopian leap rule: every fourth year, when the year leaves a
/// remainder of 3. There is no century exception.
pub const fn is_ethiopian_leap_year(year: u16) -> bool {
    year % LEAP_YEAR_CYCLE == LEAP_YEAR_REMAINDER
}

/// Number of days in the given Ethiopian month: 30 for months 1-12,
/// 5 or 6 for Pagume depending on the leap rule.
///
/// # Panics
/// Panics if `month` is outside `1..=13`. All call sites control the
/// month value, so an out-of-range month is a contract violation.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    assert!(month != 0 && month <= MAX_MONTH, "month must be within 1..=13");

    if month == PAGUME {
        if is_ethiopian_leap_year(year) {
            PAGUME_DAYS_LEAP
        } else {
            PAGUME_DAYS
        }
    } else {
        DAYS_IN_REGULAR_MONTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(2016).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(DateError::InvalidYear(0))));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(result, Err(DateError::InvalidYear(10000))));
    }

    #[test]
    fn test_year_get() {
        let year = Year::new(2016).expect("2016 is a valid year");
        assert_eq!(year.get(), 2016);
    }

    #[test]
    fn test_year_display() {
        let year = Year::new(2016).expect("2016 is a valid year");
        assert_eq!(year.to_string(), "2016");
    }

    #[test]
    fn test_year_try_from_u16() {
        let year: Year = 2016.try_into().expect("2016 is a valid year");
        assert_eq!(year.get(), 2016);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Year, _> = 10000.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_into_u16() {
        let year = Year::new(2016).expect("2016 is a valid year");
        let value: u16 = year.into();
        assert_eq!(value, 2016);
    }

    #[test]
    fn test_year_is_leap() {
        assert!(Year::new(2015).expect("valid year").is_leap());
        assert!(!Year::new(2016).expect("valid year").is_leap());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(2016).expect("2016 is a valid year");
        let json = serde_json::to_string(&year).expect("failed to serialize year");
        assert_eq!(json, "2016");

        let parsed: Year = serde_json::from_str(&json).expect("failed to deserialize year");
        assert_eq!(year, parsed);
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=13 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid_zero() {
        let result = Month::new(0);
        assert!(matches!(result, Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_month_new_invalid_too_large() {
        let result = Month::new(14);
        assert!(matches!(result, Err(DateError::InvalidMonth(14))));

        let result = Month::new(255);
        assert!(matches!(result, Err(DateError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_get() {
        let month = Month::new(8).expect("8 is a valid month");
        assert_eq!(month.get(), 8);
    }

    #[test]
    fn test_month_is_pagume() {
        assert!(Month::new(13).expect("13 is a valid month").is_pagume());
        assert!(!Month::new(12).expect("12 is a valid month").is_pagume());
    }

    #[test]
    fn test_month_display() {
        let month = Month::new(8).expect("8 is a valid month");
        assert_eq!(month.to_string(), "8");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(13).expect("13 is a valid month");
        let json = serde_json::to_string(&month).expect("failed to serialize month");
        assert_eq!(json, "13");

        let parsed: Month = serde_json::from_str(&json).expect("failed to deserialize month");
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("14");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // Regular months - 30 days
        assert!(Day::new(1, 2016, 1).is_ok());
        assert!(Day::new(30, 2016, 1).is_ok());
        assert!(Day::new(31, 2016, 1).is_err());

        // Pagume in a common year - 5 days
        assert!(Day::new(5, 2016, 13).is_ok());
        assert!(Day::new(6, 2016, 13).is_err());

        // Pagume in a leap year - 6 days
        assert!(Day::new(6, 2015, 13).is_ok());
        assert!(Day::new(7, 2015, 13).is_err());
    }

    #[test]
    fn test_day_new_invalid_zero() {
        let result = Day::new(0, 2016, 1);
        assert!(matches!(result, Err(DateError::InvalidDay { .. })));
    }

    #[test]
    fn test_day_new_invalid_too_large() {
        let result = Day::new(31, 2016, 4);
        assert!(matches!(
            result,
            Err(DateError::InvalidDay {
                year: 2016,
                month: 4,
                day: 31
            })
        ));
    }

    #[test]
    fn test_day_get() {
        let day = Day::new(15, 2016, 8).expect("valid day");
        assert_eq!(day.get(), 15);
    }

    #[test]
    fn test_day_display() {
        let day = Day::new(15, 2016, 8).expect("valid day");
        assert_eq!(day.to_string(), "15");
    }

    #[test]
    fn test_day_try_from_u8() {
        // Context-free validation accepts anything in 1..=30
        let day: Day = 30.try_into().expect("30 is within the day ceiling");
        assert_eq!(day.get(), 30);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 31.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, 2016, 8).expect("valid day");
        let json = serde_json::to_string(&day).expect("failed to serialize day");
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).expect("failed to deserialize day");
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
                year: 2011,
                is_leap: true,
                description: "remainder 3",
            },
            TestCase {
                year: 2015,
                is_leap: true,
                description: "remainder 3",
            },
            TestCase {
                year: 2019,
                is_leap: true,
                description: "remainder 3",
            },
            TestCase {
                year: 2016,
                is_leap: false,
                description: "remainder 0",
            },
            TestCase {
                year: 2017,
                is_leap: false,
                description: "remainder 1",
            },
            TestCase {
                year: 2018,
                is_leap: false,
                description: "remainder 2",
            },
            // No century exception in the Ethiopian rule
            TestCase {
                year: 1899,
                is_leap: true,
                description: "century boundary, remainder 3",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century boundary, remainder 0",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_ethiopian_leap_year(case.year),
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
    fn test_leap_year_periodicity() {
        for year in 1..=400 {
            assert_eq!(
                is_ethiopian_leap_year(year),
                is_ethiopian_leap_year(year + 4),
                "leap rule should repeat every 4 years (year {year})"
            );
            assert_eq!(
                is_ethiopian_leap_year(year),
                year % 4 == 3,
                "leap rule should be exactly `year % 4 == 3` (year {year})"
            );
        }
    }

    #[test]
    fn test_days_in_regular_months() {
        for month in 1..=12 {
            assert_eq!(
                days_in_month(2016, month),
                30,
                "Month {month} should have 30 days"
            );
        }
    }

    #[test]
    fn test_days_in_pagume() {
        assert_eq!(days_in_month(2015, 13), 6, "Pagume in a leap year");
        assert_eq!(days_in_month(2016, 13), 5, "Pagume in a common year");
    }

    #[test]
    fn test_year_length_sums() {
        for year in [2014, 2015, 2016, 2017] {
            let total: u32 = (1..=13).map(|m| u32::from(days_in_month(year, m))).sum();
            let expected = if is_ethiopian_leap_year(year) { 366 } else { 365 };
            assert_eq!(total, expected, "year {year} should have {expected} days");
        }
    }

    #[test]
    #[should_panic(expected = "month must be within 1..=13")]
    fn test_days_in_month_rejects_month_zero() {
        let _ = days_in_month(2016, 0);
    }

    #[test]
    #[should_panic(expected = "month must be within 1..=13")]
    fn test_days_in_month_rejects_month_fourteen() {
        let _ = days_in_month(2016, 14);
    }
}
