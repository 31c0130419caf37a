//! # taskcal Core Library
//!
//! This library provides the business logic for taskcal, a monthly chore
//! rotation planner. Recurring tasks are spread over the days of a month and
//! handed to people from a roster, avoiding giving anyone work on two
//! consecutive days where possible. The `taskcal` CLI is a thin layer over
//! this crate.
//!
//! ## Architecture
//!
//! - **Calendar**: date arithmetic, month navigation, holiday lookup and the
//!   month grid used by display layers
//! - **Distributor**: picks target days from a task's rule and a person for
//!   each day, with an adjacency check and a fallback when everyone conflicts
//! - **Assignment table**: date-keyed, insertion-ordered assignment records
//! - **Storage**: JSON snapshots and TOML configuration
//!
//! ## Key Components
//!
//! - [`Planner`]: caller-facing operations (add/remove person, add task)
//! - [`TaskDistributor`]: the distribution pass over one month
//! - [`AssignmentTable`]: the date -> records mapping
//! - [`SnapshotStore`]: snapshot persistence
//! - [`Config`]: application configuration

pub mod assignment;
pub mod calendar;
pub mod distributor;
pub mod error;
pub mod planner;
pub mod roster;
pub mod storage;
pub mod task;

pub use assignment::{has_adjacent_conflict, AssignmentRecord, AssignmentTable};
pub use calendar::{HolidayTable, MonthError, MonthGrid, MonthRef, WeekStart};
pub use distributor::{Distribution, RandomSource, SeededRandom, TaskDistributor};
pub use error::{ConfigError, CoreError, StorageError, ValidationError};
pub use planner::Planner;
pub use roster::{Person, Roster};
pub use storage::{Config, SnapshotStore};
pub use task::{DaySelectionRule, TaskDefinition, TaskId};
