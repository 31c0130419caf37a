//! Month grid geometry for display layers.

use chrono::Datelike;
use serde::Serialize;

use super::holidays::HolidayTable;
use super::math::{month_day_key_of, WeekStart};
use super::month::MonthRef;
use crate::assignment::{AssignmentRecord, AssignmentTable};

/// A single day cell of a month grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date_key: String,
    pub month_day: String,
    pub holiday: Option<String>,
    pub assignments: Vec<AssignmentRecord>,
}

/// A month laid out as a 7-column grid.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid {
    pub month: MonthRef,
    pub week_start: WeekStart,
    /// Empty cells before day 1
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Lay out `month`, pulling assignments from `table` and labels from `holidays`.
    pub fn build(
        month: MonthRef,
        week_start: WeekStart,
        table: &AssignmentTable,
        holidays: &HolidayTable,
    ) -> Self {
        let first = month.first_day();
        let days = month
            .days()
            .filter_map(|day| {
                let date = first.with_day(day)?;
                Some(DayCell {
                    day,
                    date_key: month.date_key(day),
                    month_day: month_day_key_of(date),
                    holiday: holidays.label_for(date).map(str::to_string),
                    assignments: table.on(date).to_vec(),
                })
            })
            .collect();

        Self {
            month,
            week_start,
            leading_blanks: week_start.column_of(first.weekday()),
            days,
        }
    }

    /// Rows of seven optional cells; `None` pads the first and last week.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let mut cells: Vec<Option<&DayCell>> = Vec::new();
        cells.extend((0..self.leading_blanks).map(|_| None));
        cells.extend(self.days.iter().map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::AssignmentRecord;
    use crate::task::TaskId;
    use chrono::NaiveDate;

    #[test]
    fn april_2025_layout() {
        let month = MonthRef::new(2025, 3).unwrap();
        let grid = MonthGrid::build(
            month,
            WeekStart::Sunday,
            &AssignmentTable::new(),
            &HolidayTable::new(),
        );
        // 2025-04-01 is a Tuesday
        assert_eq!(grid.leading_blanks, 2);
        assert_eq!(grid.days.len(), 30);
        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][1].is_none());
        assert_eq!(weeks[0][2].map(|c| c.day), Some(1));
    }

    #[test]
    fn cells_carry_holidays_and_assignments() {
        let month = MonthRef::new(2025, 3).unwrap();
        let holidays: HolidayTable = [("04-21", "Tiradentes")].into_iter().collect();
        let mut table = AssignmentTable::new();
        table.append(
            NaiveDate::from_ymd_opt(2025, 4, 21).unwrap(),
            AssignmentRecord {
                task_id: TaskId::from("t"),
                title: "Trash".into(),
                color: "#000".into(),
                person_name: "Ana".into(),
            },
        );
        let grid = MonthGrid::build(month, WeekStart::Monday, &table, &holidays);
        let cell = &grid.days[20];
        assert_eq!(cell.date_key, "2025-04-21");
        assert_eq!(cell.month_day, "04-21");
        assert_eq!(cell.holiday.as_deref(), Some("Tiradentes"));
        assert_eq!(cell.assignments.len(), 1);
        assert!(grid.days[19].holiday.is_none());
    }
}
