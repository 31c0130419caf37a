//! Recurring task definitions and their day-selection rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Opaque task identifier. Generated ids are UUID v4 and never reused.
///
/// Older snapshots stored numeric ids; those are accepted and kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => TaskId(s),
            Raw::Number(n) => TaskId(n.to_string()),
        })
    }
}

/// Which days of the month a task lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DaySelectionRule {
    /// Every even day of the month
    #[serde(rename = "even")]
    EvenDays,
    /// Every odd day of the month
    #[serde(rename = "odd")]
    OddDays,
    /// Every day of the month, with a random person each day.
    /// Stored as `"random"`; this never selects a random subset of days.
    #[serde(rename = "random")]
    AllDaysRandomPerson,
}

impl DaySelectionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DaySelectionRule::EvenDays => "even",
            DaySelectionRule::OddDays => "odd",
            DaySelectionRule::AllDaysRandomPerson => "random",
        }
    }

    /// Whether `day` (1-based) is a target day under this rule.
    pub fn selects(&self, day: u32) -> bool {
        match self {
            DaySelectionRule::EvenDays => day % 2 == 0,
            DaySelectionRule::OddDays => day % 2 == 1,
            DaySelectionRule::AllDaysRandomPerson => true,
        }
    }

    /// Target days in `1..=days_in_month`, ascending.
    pub fn target_days(&self, days_in_month: u32) -> Vec<u32> {
        (1..=days_in_month).filter(|d| self.selects(*d)).collect()
    }
}

impl fmt::Display for DaySelectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unknown rule name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown day rule '{0}', expected even, odd or random")]
pub struct ParseRuleError(String);

impl FromStr for DaySelectionRule {
    type Err = ParseRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" => Ok(DaySelectionRule::EvenDays),
            "odd" => Ok(DaySelectionRule::OddDays),
            "random" | "all" => Ok(DaySelectionRule::AllDaysRandomPerson),
            other => Err(ParseRuleError(other.to_string())),
        }
    }
}

/// An immutable recurring task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub id: TaskId,
    pub title: String,
    /// Display token, usually a CSS colour such as `#3b82f6`
    pub color: String,
    #[serde(rename = "type")]
    pub rule: DaySelectionRule,
}

impl TaskDefinition {
    /// Create a definition with a fresh id. The title is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] if the title is blank.
    pub fn new(
        title: &str,
        color: impl Into<String>,
        rule: DaySelectionRule,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            id: TaskId::generate(),
            title: title.to_string(),
            color: color.into(),
            rule,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_and_odd_partition_the_month() {
        for days in 28..=31 {
            let even = DaySelectionRule::EvenDays.target_days(days);
            let odd = DaySelectionRule::OddDays.target_days(days);
            assert_eq!(even.len() + odd.len(), days as usize);
            assert!(even.iter().all(|d| !odd.contains(d)));
        }
    }

    #[test]
    fn random_rule_targets_every_day() {
        let days = DaySelectionRule::AllDaysRandomPerson.target_days(30);
        assert_eq!(days, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn rule_parses_from_cli_names() {
        assert_eq!("even".parse::<DaySelectionRule>(), Ok(DaySelectionRule::EvenDays));
        assert_eq!("ODD".parse::<DaySelectionRule>(), Ok(DaySelectionRule::OddDays));
        assert_eq!(
            "random".parse::<DaySelectionRule>(),
            Ok(DaySelectionRule::AllDaysRandomPerson)
        );
        assert!("weekly".parse::<DaySelectionRule>().is_err());
    }

    #[test]
    fn new_rejects_blank_title() {
        let err = TaskDefinition::new("  ", "#fff", DaySelectionRule::EvenDays).unwrap_err();
        assert_eq!(err, ValidationError::EmptyTitle);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = TaskDefinition::new("Dishes", "#fff", DaySelectionRule::OddDays).unwrap();
        let b = TaskDefinition::new("Dishes", "#fff", DaySelectionRule::OddDays).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serialized_shape_uses_type_field() {
        let task = TaskDefinition {
            id: TaskId::from("t-1"),
            title: "Trash".into(),
            color: "#ff0000".into(),
            rule: DaySelectionRule::AllDaysRandomPerson,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "random");
        assert_eq!(json["id"], "t-1");
    }

    #[test]
    fn numeric_ids_are_accepted() {
        let task: TaskDefinition = serde_json::from_str(
            r##"{"id": 1717171717171, "title": "Trash", "color": "#000", "type": "even"}"##,
        )
        .unwrap();
        assert_eq!(task.id.as_str(), "1717171717171");
        assert_eq!(task.rule, DaySelectionRule::EvenDays);
    }
}
