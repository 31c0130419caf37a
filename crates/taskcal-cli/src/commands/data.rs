//! Data maintenance commands for CLI.

use clap::Subcommand;
use taskcal_core::SnapshotStore;

#[derive(Subcommand)]
pub enum DataAction {
    /// Delete every person, task and assignment
    Clear {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Print the data directory
    Path,
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;

    match action {
        DataAction::Clear { yes } => {
            if !yes {
                return Err("refusing to clear all data without --yes".into());
            }
            store.clear()?;
            println!("all data cleared");
        }
        DataAction::Path => {
            println!("{}", store.dir().display());
        }
    }
    Ok(())
}
