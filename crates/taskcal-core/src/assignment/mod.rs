//! Assignment table: date key -> ordered assignment records.
//!
//! Records carry value copies of the task title/colour and the person name,
//! so history survives removing a person or editing a task list by hand.

pub mod conflict;

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{date_key_of, parse_date_key};
use crate::task::{TaskDefinition, TaskId};

pub use conflict::has_adjacent_conflict;

/// One person holding one task on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRecord {
    pub task_id: TaskId,
    pub title: String,
    pub color: String,
    pub person_name: String,
}

impl AssignmentRecord {
    /// Snapshot `task` for `person_name`.
    pub fn for_task(task: &TaskDefinition, person_name: impl Into<String>) -> Self {
        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            color: task.color.clone(),
            person_name: person_name.into(),
        }
    }
}

type Entries = BTreeMap<String, Vec<AssignmentRecord>>;

/// Error returned when a snapshot contains a key that is not a valid `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date key '{0}'")]
pub struct InvalidDateKey(pub String);

/// Mapping from canonical date key to the records on that day.
///
/// Keys are global (not scoped to a month) so adjacency checks can look
/// across month and year boundaries. Records within a day keep insertion
/// order. Nothing is ever removed except by [`AssignmentTable::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Entries", into = "Entries")]
pub struct AssignmentTable {
    entries: Entries,
}

impl AssignmentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records on `key`, empty if none.
    pub fn get(&self, key: &str) -> &[AssignmentRecord] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Records on `date`, empty if none.
    pub fn on(&self, date: NaiveDate) -> &[AssignmentRecord] {
        self.get(&date_key_of(date))
    }

    /// Append a record to `date`. Identical records are allowed.
    pub fn append(&mut self, date: NaiveDate, record: AssignmentRecord) {
        self.entries.entry(date_key_of(date)).or_default().push(record);
    }

    /// Every date key that holds at least one record.
    pub fn all_dates(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter(|(_, records)| !records.is_empty())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Whether `person_name` holds anything on `key`.
    pub fn holds(&self, key: &str, person_name: &str) -> bool {
        self.get(key).iter().any(|r| r.person_name == person_name)
    }

    /// `(date key, record)` pairs in date order, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssignmentRecord)> {
        self.entries
            .iter()
            .flat_map(|(key, records)| records.iter().map(move |r| (key.as_str(), r)))
    }

    /// Total number of records across all dates.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TryFrom<Entries> for AssignmentTable {
    type Error = InvalidDateKey;

    fn try_from(entries: Entries) -> Result<Self, Self::Error> {
        if let Some(bad) = entries.keys().find(|k| parse_date_key(k).is_none()) {
            return Err(InvalidDateKey(bad.clone()));
        }
        Ok(Self { entries })
    }
}

impl From<AssignmentTable> for Entries {
    fn from(table: AssignmentTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::DaySelectionRule;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(task: &str, person: &str) -> AssignmentRecord {
        AssignmentRecord {
            task_id: TaskId::from(task),
            title: task.to_uppercase(),
            color: "#123456".into(),
            person_name: person.into(),
        }
    }

    #[test]
    fn get_missing_date_is_empty() {
        let table = AssignmentTable::new();
        assert!(table.get("2025-04-01").is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn append_keeps_insertion_order_and_duplicates() {
        let mut table = AssignmentTable::new();
        let d = date(2025, 4, 2);
        table.append(d, record("a", "Ana"));
        table.append(d, record("b", "Bruno"));
        table.append(d, record("a", "Ana"));

        let got = table.get("2025-04-02");
        assert_eq!(got.len(), 3);
        assert_eq!(got[0].person_name, "Ana");
        assert_eq!(got[1].person_name, "Bruno");
        assert_eq!(got[0], got[2]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn all_dates_lists_populated_keys() {
        let mut table = AssignmentTable::new();
        table.append(date(2025, 5, 1), record("a", "Ana"));
        table.append(date(2024, 12, 31), record("a", "Ana"));
        let dates: Vec<_> = table.all_dates().into_iter().collect();
        assert_eq!(dates, vec!["2024-12-31".to_string(), "2025-05-01".to_string()]);
    }

    #[test]
    fn json_roundtrip_preserves_everything() {
        let mut table = AssignmentTable::new();
        table.append(date(2025, 4, 2), record("a", "Ana"));
        table.append(date(2025, 4, 2), record("b", "Bruno"));
        table.append(date(2025, 4, 4), record("a", "Bruno"));

        let json = serde_json::to_string(&table).unwrap();
        let back: AssignmentTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
        assert_eq!(back.get("2025-04-02")[1].person_name, "Bruno");
    }

    #[test]
    fn json_shape_matches_snapshot_format() {
        let mut table = AssignmentTable::new();
        let task = TaskDefinition {
            id: TaskId::from("42"),
            title: "Trash".into(),
            color: "#ff0000".into(),
            rule: DaySelectionRule::EvenDays,
        };
        table.append(date(2025, 4, 2), AssignmentRecord::for_task(&task, "Ana"));
        let json = serde_json::to_value(&table).unwrap();
        let rec = &json["2025-04-02"][0];
        assert_eq!(rec["taskId"], "42");
        assert_eq!(rec["title"], "Trash");
        assert_eq!(rec["color"], "#ff0000");
        assert_eq!(rec["personName"], "Ana");
    }

    #[test]
    fn invalid_keys_fail_deserialization() {
        let bad = r#"{"2025-02-30": []}"#;
        assert!(serde_json::from_str::<AssignmentTable>(bad).is_err());
        let bad = r#"{"tomorrow": []}"#;
        assert!(serde_json::from_str::<AssignmentTable>(bad).is_err());
    }

    #[test]
    fn iter_walks_dates_in_order() {
        let mut table = AssignmentTable::new();
        table.append(date(2025, 4, 4), record("a", "Caio"));
        table.append(date(2025, 4, 2), record("a", "Ana"));
        table.append(date(2025, 4, 2), record("b", "Bruno"));
        let people: Vec<_> = table.iter().map(|(_, r)| r.person_name.as_str()).collect();
        assert_eq!(people, vec!["Ana", "Bruno", "Caio"]);
    }
}
