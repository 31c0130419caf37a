//! Adjacent-day conflict detection.
//!
//! The check scans every record on the neighbouring dates, regardless of
//! which task produced it. A person placed on day 4 by one task therefore
//! blocks days 3 and 5 for any task distributed afterwards.

use crate::calendar::adjacent_key;

use super::AssignmentTable;

/// True if `person_name` holds any record on the day before or after
/// `day` of the given month. Neighbouring days may fall in another month
/// or year; they are looked up in the same table.
pub fn has_adjacent_conflict(
    table: &AssignmentTable,
    person_name: &str,
    year: i32,
    month_index: u32,
    day: u32,
) -> bool {
    [-1, 1].into_iter().any(|offset| {
        adjacent_key(year, month_index, day, offset)
            .is_some_and(|key| table.holds(&key, person_name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentRecord;
    use crate::task::TaskId;
    use chrono::NaiveDate;

    fn put(table: &mut AssignmentTable, y: i32, m: u32, d: u32, task: &str, person: &str) {
        table.append(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            AssignmentRecord {
                task_id: TaskId::from(task),
                title: task.into(),
                color: "#000".into(),
                person_name: person.into(),
            },
        );
    }

    #[test]
    fn previous_and_next_day_conflict() {
        let mut table = AssignmentTable::new();
        put(&mut table, 2025, 4, 10, "t", "Ana");
        assert!(has_adjacent_conflict(&table, "Ana", 2025, 3, 9));
        assert!(has_adjacent_conflict(&table, "Ana", 2025, 3, 11));
        assert!(!has_adjacent_conflict(&table, "Ana", 2025, 3, 10));
        assert!(!has_adjacent_conflict(&table, "Ana", 2025, 3, 12));
        assert!(!has_adjacent_conflict(&table, "Bruno", 2025, 3, 9));
    }

    #[test]
    fn conflict_crosses_month_boundary() {
        let mut table = AssignmentTable::new();
        put(&mut table, 2025, 3, 31, "t", "Ana");
        assert!(has_adjacent_conflict(&table, "Ana", 2025, 3, 1));
    }

    #[test]
    fn conflict_crosses_year_boundary() {
        let mut table = AssignmentTable::new();
        put(&mut table, 2025, 1, 1, "t", "Bruno");
        assert!(has_adjacent_conflict(&table, "Bruno", 2024, 11, 31));
    }

    #[test]
    fn other_tasks_count_as_conflicts() {
        let mut table = AssignmentTable::new();
        put(&mut table, 2025, 4, 3, "dishes", "Ana");
        put(&mut table, 2025, 4, 3, "trash", "Bruno");
        assert!(has_adjacent_conflict(&table, "Ana", 2025, 3, 4));
        assert!(has_adjacent_conflict(&table, "Bruno", 2025, 3, 2));
    }
}
