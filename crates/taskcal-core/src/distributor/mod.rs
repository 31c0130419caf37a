//! Task distribution over a month.
//!
//! For each target day of a task's rule, in ascending order:
//! - collect roster members with no record on the neighbouring days
//! - if that leaves nobody, fall back to the whole roster
//! - pick one uniformly at random and append the record to the table
//!
//! Each pick is written before the next day is considered, so a single pass
//! sees its own earlier placements. The adjacency check reads the whole
//! table, so records from other tasks also count as conflicts.

pub mod random;


use serde::Serialize;
use tracing::{debug, info, warn};

use crate::assignment::{has_adjacent_conflict, AssignmentRecord, AssignmentTable};
use crate::calendar::MonthRef;
use crate::roster::Person;
use crate::task::{TaskDefinition, TaskId};

pub use random::{RandomSource, SeededRandom};

/// One placement made during a distribution pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAssignment {
    pub day: u32,
    pub date_key: String,
    pub person_name: String,
    /// Every roster member conflicted and the full roster was used instead
    pub fallback: bool,
}

/// Outcome of distributing one task over one month.
#[derive(Debug, Clone, Serialize)]
pub struct Distribution {
    pub task_id: TaskId,
    pub month: MonthRef,
    pub assignments: Vec<DayAssignment>,
}

impl Distribution {
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of days where the fallback policy was applied.
    pub fn fallback_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.fallback).count()
    }
}

/// Target days of `task` within `month`, ascending.
pub fn target_days(task: &TaskDefinition, month: MonthRef) -> Vec<u32> {
    task.rule.target_days(month.days_in_month())
}

/// Assigns people to a task's target days.
pub struct TaskDistributor<R> {
    random: R,
}

impl<R: RandomSource> TaskDistributor<R> {
    pub fn new(random: R) -> Self {
        Self { random }
    }

    /// Distribute `task` over `month`, appending one record per target day
    /// to `table`.
    ///
    /// Never fails: with a non-empty roster every target day gets exactly one
    /// record. An empty roster is a caller error and yields no records.
    pub fn distribute(
        &mut self,
        task: &TaskDefinition,
        roster: &[Person],
        month: MonthRef,
        table: &mut AssignmentTable,
    ) -> Distribution {
        let mut out = Distribution {
            task_id: task.id.clone(),
            month,
            assignments: Vec::new(),
        };

        if roster.is_empty() {
            warn!(task_id = %task.id, %month, "distribution skipped: empty roster");
            return out;
        }

        let year = month.year();
        let month_index = month.month_index();

        for day in target_days(task, month) {
            let Some(date) = crate::calendar::resolve_day(year, month_index, day, 0) else {
                continue;
            };

            let eligible: Vec<&Person> = roster
                .iter()
                .filter(|p| !has_adjacent_conflict(table, p.name(), year, month_index, day))
                .collect();

            let fallback = eligible.is_empty();
            let pool: Vec<&Person> = if fallback {
                roster.iter().collect()
            } else {
                eligible
            };

            let idx = self.random.pick_index(pool.len()).min(pool.len() - 1);
            let chosen = pool[idx];

            if fallback {
                warn!(task_id = %task.id, day, "all people conflict, using full roster");
            }
            debug!(
                task_id = %task.id,
                date = %date,
                person = chosen.name(),
                eligible = pool.len(),
                "assigned"
            );

            table.append(date, AssignmentRecord::for_task(task, chosen.name()));
            out.assignments.push(DayAssignment {
                day,
                date_key: month.date_key(day),
                person_name: chosen.name().to_string(),
                fallback,
            });
        }

        info!(
            task_id = %task.id,
            title = %task.title,
            %month,
            days = out.len(),
            fallbacks = out.fallback_count(),
            "task distributed"
        );
        out
    }

    /// Give the random source back.
    pub fn into_inner(self) -> R {
        self.random
    }
}
