mod config;
pub mod snapshot;

pub use config::{CalendarConfig, Config, DistributionConfig, TasksConfig};
pub use snapshot::{SnapshotStore, ASSIGNMENTS_KEY, PEOPLE_KEY, TASKS_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the taskcal data directory, creating it if needed.
///
/// `TASKCAL_DATA_DIR` wins when set. Otherwise `~/.config/taskcal/`, or
/// `~/.config/taskcal-dev/` with `TASKCAL_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("TASKCAL_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("TASKCAL_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("taskcal-dev")
            } else {
                base_dir.join("taskcal")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
