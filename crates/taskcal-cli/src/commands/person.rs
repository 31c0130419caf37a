//! Roster commands for CLI.

use clap::Subcommand;

use super::load_planner;

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person to the roster
    Add {
        /// Person name
        name: String,
    },
    /// Remove a person (their past assignments are kept)
    Remove {
        /// Person name
        name: String,
    },
    /// List the roster
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PersonAction) -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut planner) = load_planner()?;

    match action {
        PersonAction::Add { name } => {
            let added = planner.add_person(&name)?.name().to_string();
            planner.save(&store)?;
            println!("Person added: {added}");
        }
        PersonAction::Remove { name } => {
            if planner.remove_person(&name) {
                planner.save(&store)?;
                println!("Person removed: {}", name.trim());
            } else {
                return Err(format!("no person named '{}'", name.trim()).into());
            }
        }
        PersonAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(planner.roster())?);
            } else if planner.roster().is_empty() {
                println!("No people yet.");
            } else {
                for person in planner.roster() {
                    println!("{person}");
                }
            }
        }
    }
    Ok(())
}
