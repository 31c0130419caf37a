//! Caller-facing facade: roster, task list and assignment table together.
//!
//! Embedding applications call these operations; validation happens here,
//! before anything reaches the distributor.

use tracing::info;

use crate::assignment::AssignmentTable;
use crate::calendar::{HolidayTable, MonthGrid, MonthRef, WeekStart};
use crate::distributor::{Distribution, RandomSource, TaskDistributor};
use crate::error::{StorageError, ValidationError};
use crate::roster::{Person, Roster};
use crate::storage::{SnapshotStore, ASSIGNMENTS_KEY, PEOPLE_KEY, TASKS_KEY};
use crate::task::{DaySelectionRule, TaskDefinition};

/// In-memory application state.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    roster: Roster,
    tasks: Vec<TaskDefinition>,
    table: AssignmentTable,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore state from the three snapshots. Never fails; missing or
    /// malformed snapshots come back empty.
    pub fn load(store: &SnapshotStore) -> Self {
        Self {
            roster: store.load_people().dedup(),
            tasks: store.load_tasks(),
            table: store.load_assignments(),
        }
    }

    /// Write all three snapshots.
    ///
    /// # Errors
    /// Returns the first storage error encountered.
    pub fn save(&self, store: &SnapshotStore) -> Result<(), StorageError> {
        store.save(PEOPLE_KEY, &self.roster)?;
        store.save(TASKS_KEY, &self.tasks)?;
        store.save(ASSIGNMENTS_KEY, &self.table)?;
        Ok(())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn tasks(&self) -> &[TaskDefinition] {
        &self.tasks
    }

    pub fn table(&self) -> &AssignmentTable {
        &self.table
    }

    /// Add a person to the roster.
    ///
    /// # Errors
    /// [`ValidationError::EmptyName`] or [`ValidationError::DuplicateName`].
    pub fn add_person(&mut self, name: &str) -> Result<&Person, ValidationError> {
        let person = self.roster.add(name)?;
        info!(name = person.name(), "person added");
        Ok(person)
    }

    /// Remove a person from the roster. Their past assignments stay in the
    /// table. Returns `false` if nobody had that name.
    pub fn remove_person(&mut self, name: &str) -> bool {
        let removed = self.roster.remove(name);
        if removed {
            info!(name = name.trim(), "person removed");
        }
        removed
    }

    /// Create a task and distribute it over `month`.
    ///
    /// # Errors
    /// [`ValidationError::EmptyTitle`] for a blank title, then
    /// [`ValidationError::EmptyRoster`] if nobody is on the roster.
    pub fn add_task<R: RandomSource>(
        &mut self,
        title: &str,
        color: &str,
        rule: DaySelectionRule,
        month: MonthRef,
        random: R,
    ) -> Result<(TaskDefinition, Distribution), ValidationError> {
        let task = TaskDefinition::new(title, color, rule)?;
        if self.roster.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }

        let distribution = self.distribute(&task, month, random);
        self.tasks.push(task.clone());
        Ok((task, distribution))
    }

    /// Distribute an existing definition again, appending to the table.
    pub fn distribute<R: RandomSource>(
        &mut self,
        task: &TaskDefinition,
        month: MonthRef,
        random: R,
    ) -> Distribution {
        TaskDistributor::new(random).distribute(task, self.roster.people(), month, &mut self.table)
    }

    /// Lay out `month` for display.
    pub fn month_grid(
        &self,
        month: MonthRef,
        week_start: WeekStart,
        holidays: &HolidayTable,
    ) -> MonthGrid {
        MonthGrid::build(month, week_start, &self.table, holidays)
    }

    /// Drop every person, task and assignment.
    pub fn clear(&mut self) {
        self.roster.clear();
        self.tasks.clear();
        self.table.clear();
        info!("all data cleared");
    }
}
