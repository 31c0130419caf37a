//! Month cursor used for navigation and as the distribution target.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Serialize, Serializer};

use super::math;

/// A calendar month, held as its first day.
///
/// Years are limited to `0000..=9999` so every date key in the month is a
/// four-digit `YYYY-MM-DD` that parses back to the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthRef {
    first: NaiveDate,
}

impl MonthRef {
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    /// Build a month, folding overflowing indices into the year
    /// (`MonthRef::new(2024, 12)` is January 2025).
    ///
    /// # Errors
    /// [`MonthError::OutOfRange`] if the folded year is outside `0000..=9999`.
    pub fn new(year: i32, month_index: u32) -> Result<Self, MonthError> {
        Self::from_offset(year, i64::from(month_index))
    }

    fn from_offset(year: i32, months: i64) -> Result<Self, MonthError> {
        let total = i64::from(year) * 12 + months;
        let y = total.div_euclid(12);
        let m = total.rem_euclid(12);
        if !(i64::from(Self::MIN_YEAR)..=i64::from(Self::MAX_YEAR)).contains(&y) {
            return Err(MonthError::OutOfRange(y));
        }
        i32::try_from(y)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, m as u32 + 1, 1))
            .map(|first| Self { first })
            .ok_or(MonthError::OutOfRange(y))
    }

    /// The month containing today's local date.
    ///
    /// # Errors
    /// [`MonthError::OutOfRange`] if the clock is past year 9999.
    pub fn current() -> Result<Self, MonthError> {
        Self::containing(Local::now().date_naive())
    }

    /// The month containing `date`.
    ///
    /// # Errors
    /// [`MonthError::OutOfRange`] if `date` is outside `0000..=9999`.
    pub fn containing(date: NaiveDate) -> Result<Self, MonthError> {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 0-based month index (January = 0).
    pub fn month_index(&self) -> u32 {
        self.first.month0()
    }

    /// 1-based month number.
    pub fn month_number(&self) -> u32 {
        self.first.month()
    }

    pub fn next(&self) -> Result<Self, MonthError> {
        self.shift(1)
    }

    pub fn prev(&self) -> Result<Self, MonthError> {
        self.shift(-1)
    }

    /// Move by `months`, rolling across year boundaries.
    ///
    /// # Errors
    /// [`MonthError::OutOfRange`] when the move leaves `0000..=9999`.
    pub fn shift(&self, months: i32) -> Result<Self, MonthError> {
        Self::from_offset(
            self.year(),
            i64::from(self.month_index()) + i64::from(months),
        )
    }

    pub fn days_in_month(&self) -> u32 {
        math::days_in_month(self.year(), self.month_index())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Date key for a day of this month.
    pub fn date_key(&self, day: u32) -> String {
        math::date_key(self.year(), self.month_index(), day)
    }

    /// Iterate over `1..=days_in_month`.
    pub fn days(&self) -> impl Iterator<Item = u32> {
        1..=self.days_in_month()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month_number())
    }
}

/// Serialized as its `YYYY-MM` display form.
impl Serialize for MonthRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error building or parsing a [`MonthRef`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthError {
    #[error("invalid month '{0}', expected YYYY-MM")]
    Malformed(String),

    #[error("year {0} is outside the supported range 0000..=9999")]
    OutOfRange(i64),
}

impl FromStr for MonthRef {
    type Err = MonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthError::Malformed(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(err)?;
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let year: i64 = year.parse().map_err(|_| err())?;
        let month: u32 = month.parse().map_err(|_| err())?;
        if !(1..=12).contains(&month) {
            return Err(err());
        }
        let year = i32::try_from(year).map_err(|_| MonthError::OutOfRange(year))?;
        Self::new(year, month - 1)
    }
}
