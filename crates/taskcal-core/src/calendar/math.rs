//! Pure date arithmetic over `(year, month_index, day)` triples.
//!
//! Month indices are 0-based (January = 0). Days are 1-based. Every function
//! normalizes out-of-range months and day offsets the way a calendar does,
//! so `adjacent_key(2024, 11, 31, 1)` lands on `2025-01-01`.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First column of a rendered week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Column index (0..=6) of `weekday` in a week starting on `self`.
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// Weekday shown in each column, left to right.
    pub fn columns(self) -> [Weekday; 7] {
        let first = match self {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        };
        let mut out = [first; 7];
        for i in 1..7 {
            out[i] = out[i - 1].succ();
        }
        out
    }
}

/// Fold an arbitrary month offset into a `(year, month_index)` pair.
fn normalize(year: i32, month_index: i64) -> (i32, u32) {
    let total = i64::from(year) * 12 + month_index;
    let y = total.div_euclid(12);
    let m = total.rem_euclid(12);
    (y as i32, m as u32)
}

/// Day 1 of the given month, or `None` outside chrono's date range.
pub fn first_of_month(year: i32, month_index: u32) -> Option<NaiveDate> {
    let (y, m) = normalize(year, i64::from(month_index));
    NaiveDate::from_ymd_opt(y, m + 1, 1)
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the month (proleptic Gregorian).
pub fn days_in_month(year: i32, month_index: u32) -> u32 {
    let (y, m) = normalize(year, i64::from(month_index));
    match m {
        1 if is_leap_year(y) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of day 1, counted from Sunday (0 = Sunday .. 6 = Saturday).
pub fn weekday_of_first(year: i32, month_index: u32) -> Option<u32> {
    weekday_of_first_from(year, month_index, WeekStart::Sunday)
}

/// Weekday of day 1 as a column index for a week beginning on `week_start`.
pub fn weekday_of_first_from(year: i32, month_index: u32, week_start: WeekStart) -> Option<u32> {
    first_of_month(year, month_index).map(|first| week_start.column_of(first.weekday()))
}

/// Canonical `YYYY-MM-DD` key for a date.
pub fn date_key_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Canonical `YYYY-MM-DD` key, zero-padded.
pub fn date_key(year: i32, month_index: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month_index + 1, day)
}

/// `MM-DD` key used for holiday lookups.
pub fn month_day_key_of(date: NaiveDate) -> String {
    format!("{:02}-{:02}", date.month(), date.day())
}

/// Resolve `day + offset` within the given month to a concrete date.
pub fn resolve_day(year: i32, month_index: u32, day: u32, offset: i64) -> Option<NaiveDate> {
    let delta = i64::from(day) - 1 + offset;
    first_of_month(year, month_index)?.checked_add_signed(Duration::days(delta))
}

/// Date key for `day + offset`, rolling into the previous or next month/year.
pub fn adjacent_key(year: i32, month_index: u32, day: u32, offset: i64) -> Option<String> {
    resolve_day(year, month_index, day, offset).map(date_key_of)
}

/// Parse a canonical date key. Rejects non-padded or impossible dates.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    (date_key_of(date) == key).then_some(date)
}
