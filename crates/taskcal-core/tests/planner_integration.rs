//! Integration tests for the planner, distributor and snapshot store.

use taskcal_core::calendar::{adjacent_key, WeekStart};
use taskcal_core::{
    DaySelectionRule, HolidayTable, MonthRef, Planner, SeededRandom, SnapshotStore,
    ValidationError,
};
use tempfile::TempDir;

#[test]
fn test_month_of_chores_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::at(temp_dir.path());
    let april = MonthRef::new(2025, 3).unwrap();

    let mut planner = Planner::load(&store);
    planner.add_person("Ana").unwrap();
    planner.add_person("Bruno").unwrap();
    planner.add_person("Caio").unwrap();

    planner
        .add_task("Dishes", "#4caf50", DaySelectionRule::EvenDays, april, SeededRandom::from_seed(11))
        .unwrap();
    planner
        .add_task("Trash", "#f44336", DaySelectionRule::OddDays, april, SeededRandom::from_seed(12))
        .unwrap();
    planner
        .add_task("Laundry", "#2196f3", DaySelectionRule::AllDaysRandomPerson, april, SeededRandom::from_seed(13))
        .unwrap();
    planner.save(&store).unwrap();

    let reloaded = Planner::load(&store);
    assert_eq!(reloaded.tasks().len(), 3);
    assert_eq!(reloaded.table().len(), 15 + 15 + 30);

    // Every day has its odd/even chore plus laundry, in distribution order.
    for day in april.days() {
        let records = reloaded.table().get(&april.date_key(day));
        assert_eq!(records.len(), 2, "day {day}");
        let expected_first = if day % 2 == 0 { "Dishes" } else { "Trash" };
        assert_eq!(records[0].title, expected_first);
        assert_eq!(records[1].title, "Laundry");
    }
}

#[test]
fn test_adjacency_holds_for_first_task_without_fallback() {
    let mut planner = Planner::new();
    for name in ["Ana", "Bruno", "Caio"] {
        planner.add_person(name).unwrap();
    }
    let may = MonthRef::new(2025, 4).unwrap();
    let (_, dist) = planner
        .add_task("Laundry", "#000", DaySelectionRule::AllDaysRandomPerson, may, SeededRandom::from_seed(77))
        .unwrap();

    assert_eq!(dist.fallback_count(), 0);
    for a in &dist.assignments {
        let prev = adjacent_key(may.year(), may.month_index(), a.day, -1).unwrap();
        // Only earlier days exist at selection time in a fresh table.
        assert!(!planner
            .table()
            .get(&prev)
            .iter()
            .any(|r| r.person_name == a.person_name));
    }
}

#[test]
fn test_validation_errors_surface_in_order() {
    let mut planner = Planner::new();
    let may = MonthRef::new(2025, 4).unwrap();
    assert_eq!(planner.add_person("  ").unwrap_err(), ValidationError::EmptyName);
    assert_eq!(
        planner
            .add_task(" ", "#000", DaySelectionRule::OddDays, may, SeededRandom::from_seed(1))
            .unwrap_err(),
        ValidationError::EmptyTitle
    );
    assert_eq!(
        planner
            .add_task("Trash", "#000", DaySelectionRule::OddDays, may, SeededRandom::from_seed(1))
            .unwrap_err(),
        ValidationError::EmptyRoster
    );
}

#[test]
fn test_month_grid_reflects_table() {
    let mut planner = Planner::new();
    planner.add_person("Ana").unwrap();
    let feb = MonthRef::new(2023, 1).unwrap();
    planner
        .add_task("Plants", "#0f0", DaySelectionRule::AllDaysRandomPerson, feb, SeededRandom::from_seed(2))
        .unwrap();

    let holidays: HolidayTable = [("02-14", "Valentine's Day")].into_iter().collect();
    let grid = planner.month_grid(feb, WeekStart::Sunday, &holidays);
    assert_eq!(grid.days.len(), 28);
    // 2023-02-01 was a Wednesday
    assert_eq!(grid.leading_blanks, 3);
    assert!(grid.days.iter().all(|c| c.assignments.len() == 1));
    assert_eq!(grid.days[13].holiday.as_deref(), Some("Valentine's Day"));
}

#[test]
fn test_cleared_store_loads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::at(temp_dir.path());
    let mut planner = Planner::new();
    planner.add_person("Ana").unwrap();
    planner.save(&store).unwrap();

    store.clear().unwrap();
    let reloaded = Planner::load(&store);
    assert!(reloaded.roster().is_empty());
}

#[test]
fn test_last_supported_month_survives_restart() {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::at(temp_dir.path());
    let april = MonthRef::new(2025, 3).unwrap();
    let last: MonthRef = "9999-12".parse().unwrap();

    let mut planner = Planner::new();
    planner.add_person("Ana").unwrap();
    planner.add_person("Bruno").unwrap();
    planner
        .add_task("Dishes", "#fff", DaySelectionRule::AllDaysRandomPerson, april, SeededRandom::from_seed(4))
        .unwrap();
    planner
        .add_task("Trash", "#000", DaySelectionRule::EvenDays, last, SeededRandom::from_seed(5))
        .unwrap();
    assert_eq!(planner.table().get("9999-12-30").len(), 1);
    planner.save(&store).unwrap();

    let reloaded = Planner::load(&store);
    assert_eq!(reloaded.table().len(), 30 + 15);
    assert_eq!(reloaded.table(), planner.table());
}

#[test]
fn test_five_digit_year_never_reaches_the_table() {
    assert!("10000-01".parse::<MonthRef>().is_err());
    assert!("300000-01".parse::<MonthRef>().is_err());
    assert!(MonthRef::new(9999, 11).unwrap().next().is_err());
}
