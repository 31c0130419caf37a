pub mod config;
pub mod data;
pub mod month;
pub mod person;
pub mod task;

use taskcal_core::{Planner, SnapshotStore};

/// Open the default snapshot store and load state from it.
pub fn load_planner() -> Result<(SnapshotStore, Planner), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;
    let planner = Planner::load(&store);
    Ok((store, planner))
}
