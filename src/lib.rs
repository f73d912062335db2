mod consts;
mod numeral;
mod prelude;
mod store;
mod types;

pub use consts::*;
pub use numeral::{to_ethiopic_numeral, to_geez_numeral};
pub use store::{
    AvailabilityEntry, DateRange, InMemoryMeetingStore, Meeting, MeetingId, MeetingLookup,
    MeetingStore, StoreError, TimeOfDay, TimeRange, lookup_with_fallback,
};
pub use types::{Day, Month, Year, days_in_month, is_ethiopian_leap_year};

use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date in the Ethiopian calendar: 12 months of 30 days each, plus
/// Pagume, a 13th month of 5 or 6 days.
///
/// Values are immutable and ordered chronologically. Conversion to and
/// from the Gregorian calendar uses a fixed September 11 New Year epoch
/// in both directions; see [`EthiopicDate::from_gregorian`] for the
/// consequences.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "RawEthiopicDate", into = "RawEthiopicDate")]
pub struct EthiopicDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Error type for date construction and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year is 0 or above the supported ceiling.
    #[error("Invalid year: {0} (must be 1-{MAX_YEAR})")]
    InvalidYear(u16),

    /// Month outside Meskerem..=Pagume.
    #[error("Invalid month: {0} (must be 1-{MAX_MONTH})")]
    InvalidMonth(u8),

    /// Day is 0 or past the end of its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Gregorian input maps to an Ethiopian year outside `1..=MAX_YEAR`.
    #[error("Gregorian date maps to unsupported Ethiopian year {0}")]
    UnsupportedYear(i32),
}

// Plain integer shape used on the wire: {"year": ..., "month": ..., "day": ...}
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawEthiopicDate {
    year: u16,
    month: u8,
    day: u8,
}

impl From<EthiopicDate> for RawEthiopicDate {
    fn from(date: EthiopicDate) -> Self {
        Self {
            year: date.year.get(),
            month: date.month.get(),
            day: date.day.get(),
        }
    }
}

impl TryFrom<RawEthiopicDate> for EthiopicDate {
    type Error = DateError;

    // Deserialization accepts any day within the 30-day ceiling so that
    // every date this crate can produce (including the Pagume 6
    // epoch artifact, see `from_gregorian`) survives a round trip.
    fn try_from(raw: RawEthiopicDate) -> Result<Self, Self::Error> {
        Ok(Self {
            year: Year::new(raw.year)?,
            month: Month::new(raw.month)?,
            day: Day::try_from(raw.day)?,
        })
    }
}

impl EthiopicDate {
    /// Creates a date, validating the day against the actual month
    /// length (30, or 5/6 for Pagume depending on the leap rule).
    ///
    /// # Errors
    /// Returns `DateError` if any component is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month)?,
            day: Day::new(day, year, month)?,
        })
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8 (1 = Meskerem .. 13 = Pagume)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Amharic name of this date's month
    pub fn month_name(&self) -> &'static str {
        ETHIOPIC_MONTHS[usize::from(self.month.get()) - 1]
    }

    /// Whether this date falls in a 366-day Ethiopian year
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Converts a Gregorian calendar date to its Ethiopian counterpart.
    ///
    /// The New Year boundary is taken as September 11 of every Gregorian
    /// year. The astronomically correct calendar shifts the boundary to
    /// September 12 in the Gregorian year preceding a Gregorian leap
    /// year; that shift is intentionally not modeled, so for one day per
    /// leap cycle this function yields Pagume 6 in a common year and the
    /// Gregorian round trip may drift by a single day.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedYear` when the input maps outside
    /// Ethiopian years `1..=9999`.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, DateError> {
        let mut new_year = new_year_in(date.year());
        if date < new_year {
            new_year = new_year_in(date.year() - 1);
        }

        // Whole days between the selected New Year and the input;
        // 0..=365 by choice of boundary.
        let days_since_new_year = (date - new_year).num_days();
        let mut year = new_year.year() - GREGORIAN_YEAR_OFFSET;
        let mut month = days_since_new_year / i64::from(DAYS_IN_REGULAR_MONTH) + 1;
        let mut day = days_since_new_year % i64::from(DAYS_IN_REGULAR_MONTH) + 1;

        // Clamp in case rounding ever compounds past Pagume; not a
        // normal path.
        if month > i64::from(MAX_MONTH) {
            month = i64::from(MESKEREM);
            day = i64::from(MIN_DAY);
            year += 1;
        }

        let year = u16::try_from(year).map_err(|_| DateError::UnsupportedYear(year))?;

        Ok(Self {
            year: Year::new(year)?,
            month: Month::new(month as u8)?,
            day: Day::try_from(day as u8)?,
        })
    }

    /// Converts this date to the Gregorian calendar.
    ///
    /// Uses the same fixed September 11 epoch as [`from_gregorian`],
    /// with the same caveat about the missing September 12 shift.
    ///
    /// [`from_gregorian`]: EthiopicDate::from_gregorian
    pub fn to_gregorian(&self) -> NaiveDate {
        let new_year = new_year_in(i32::from(self.year.get()) + GREGORIAN_YEAR_OFFSET);
        let days_to_add = i64::from(self.month.get() - 1) * i64::from(DAYS_IN_REGULAR_MONTH)
            + i64::from(self.day.get() - 1);
        new_year + Duration::days(days_to_add)
    }

    /// Today's date in the Ethiopian calendar, from the local clock.
    pub fn today() -> Self {
        Self::from_gregorian(Local::now().date_naive())
            .expect("current date maps to a supported Ethiopian year")
    }

    /// Adds `days` calendar days (negative values subtract) by routing
    /// through the Gregorian calendar. Inherits the round-trip
    /// imprecision of the fixed-epoch conversions.
    ///
    /// # Errors
    /// Returns `DateError::UnsupportedYear` when the result leaves the
    /// supported year range.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        Self::from_gregorian(self.to_gregorian() + Duration::days(days))
    }

    /// Formats as `"<day> <MonthName> <year>"`, with the day and year
    /// rendered as Ge'ez numerals when `use_geez` is true.
    pub fn format(&self, use_geez: bool) -> String {
        if use_geez {
            format!(
                "{} {} {}",
                to_ethiopic_numeral(i64::from(self.day.get())),
                self.month_name(),
                to_ethiopic_numeral(i64::from(self.year.get()))
            )
        } else {
            format!("{} {} {}", self.day, self.month_name(), self.year)
        }
    }

    /// Amharic weekday name of this date
    pub fn weekday_name(&self) -> &'static str {
        ethiopic_weekday(self.to_gregorian())
    }
}

/// Amharic weekday name for a Gregorian date, from the Monday-first
/// 7-entry table.
pub fn ethiopic_weekday(date: NaiveDate) -> &'static str {
    ETHIOPIC_WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

// September 11 of the given Gregorian year.
fn new_year_in(gregorian_year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(gregorian_year, NEW_YEAR_MONTH, NEW_YEAR_DAY)
        .expect("September 11 exists in every Gregorian year")
}

impl fmt::Display for EthiopicDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name(), self.year)
    }
}

impl TryFrom<NaiveDate> for EthiopicDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_gregorian(date)
    }
}

impl From<EthiopicDate> for NaiveDate {
    fn from(date: EthiopicDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<(u16, u8, u8)> for EthiopicDate {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}
