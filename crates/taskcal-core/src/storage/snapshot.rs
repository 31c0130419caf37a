//! JSON snapshot persistence for the roster, task list and assignment table.
//!
//! Each snapshot lives in `<dir>/<key>.json`. Reads never fail: a missing
//! file is empty state, and so is a file that cannot be parsed (logged).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::data_dir;
use crate::assignment::AssignmentTable;
use crate::error::StorageError;
use crate::roster::Roster;
use crate::task::TaskDefinition;

pub const PEOPLE_KEY: &str = "calendar_people";
pub const TASKS_KEY: &str = "calendar_tasks";
pub const ASSIGNMENTS_KEY: &str = "calendar_assignments";

const ALL_KEYS: [&str; 3] = [PEOPLE_KEY, TASKS_KEY, ASSIGNMENTS_KEY];

/// File-backed store for the three snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Open the store in the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self { dir: data_dir()? })
    }

    /// Store rooted at `dir`. The directory is created on first save.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Load a snapshot, falling back to `T::default()` when missing or malformed.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let path = self.path_for(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!(key, path = %path.display(), error = %e, "snapshot not readable, using empty");
                return T::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(key, path = %path.display(), error = %e, "malformed snapshot, using empty");
            T::default()
        })
    }

    /// Serialize `value` to the snapshot for `key`.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the write fails.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        let content = serde_json::to_string_pretty(value)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &path)?;
        debug!(key, path = %path.display(), "snapshot saved");
        Ok(())
    }

    pub fn load_people(&self) -> Roster {
        self.load(PEOPLE_KEY)
    }

    pub fn load_tasks(&self) -> Vec<TaskDefinition> {
        self.load(TASKS_KEY)
    }

    pub fn load_assignments(&self) -> AssignmentTable {
        self.load(ASSIGNMENTS_KEY)
    }

    /// Delete all three snapshots. Missing files are ignored.
    ///
    /// # Errors
    /// Returns an error if an existing file cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        for key in ALL_KEYS {
            match std::fs::remove_file(self.path_for(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}
