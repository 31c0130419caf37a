//! Fixed-date holiday lookup keyed by `MM-DD`.
//!
//! The table ships empty; entries come from the `[holidays]` config section.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::math::month_day_key_of;

/// Mapping from `MM-DD` to a holiday label, recurring every year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayTable {
    entries: BTreeMap<String, String>,
}

impl HolidayTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the label for an `MM-DD` key.
    pub fn insert(&mut self, month_day: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(month_day.into(), label.into());
    }

    /// Holiday label for `date`, if any.
    pub fn label_for(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&month_day_key_of(date)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// True for a zero-padded `MM-DD` that names a real day (`02-29` included).
pub fn is_month_day_key(key: &str) -> bool {
    NaiveDate::parse_from_str(&format!("2000-{key}"), "%Y-%m-%d")
        .is_ok_and(|date| month_day_key_of(date) == key)
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HolidayTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_any_year() {
        let table: HolidayTable = [("12-25", "Christmas")].into_iter().collect();
        let d1 = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2031, 12, 25).unwrap();
        let d3 = NaiveDate::from_ymd_opt(2031, 12, 24).unwrap();
        assert_eq!(table.label_for(d1), Some("Christmas"));
        assert_eq!(table.label_for(d2), Some("Christmas"));
        assert_eq!(table.label_for(d3), None);
    }

    #[test]
    fn month_day_keys_must_name_a_day() {
        assert!(is_month_day_key("12-25"));
        assert!(is_month_day_key("02-29"));
        assert!(!is_month_day_key("christmas"));
        assert!(!is_month_day_key("2-9"));
        assert!(!is_month_day_key("02-30"));
        assert!(!is_month_day_key("13-01"));
    }

    #[test]
    fn empty_by_default() {
        assert!(HolidayTable::default().is_empty());
    }
}
