//! Task commands for CLI.

use clap::Subcommand;
use serde_json::json;
use taskcal_core::{Config, DaySelectionRule, MonthRef, SeededRandom};

use super::load_planner;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task and distribute it over a month
    Add {
        /// Task title
        title: String,
        /// Display colour (default from config `tasks.default_color`)
        #[arg(long)]
        color: Option<String>,
        /// Day rule: even, odd or random (every day, random person)
        #[arg(long, default_value = "even")]
        rule: DaySelectionRule,
        /// Month to fill as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<MonthRef>,
        /// Random seed (overrides config `distribution.seed`)
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List task definitions
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let (store, mut planner) = load_planner()?;

    match action {
        TaskAction::Add {
            title,
            color,
            rule,
            month,
            seed,
            json,
        } => {
            let config = Config::load_or_default();
            let color = color.unwrap_or(config.tasks.default_color);
            let month = match month {
                Some(month) => month,
                None => MonthRef::current()?,
            };
            let random = SeededRandom::from_optional_seed(seed.or(config.distribution.seed));

            let (task, distribution) = planner.add_task(&title, &color, rule, month, random)?;
            planner.save(&store)?;

            if json {
                let out = json!({ "task": task, "distribution": distribution });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("Task created: {}", task.id);
                println!(
                    "{} [{}] -> {} day(s) in {}",
                    task.title,
                    task.rule,
                    distribution.len(),
                    month
                );
                if distribution.fallback_count() > 0 {
                    println!(
                        "{} day(s) repeat a person from an adjacent day (not enough people)",
                        distribution.fallback_count()
                    );
                }
            }
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(planner.tasks())?);
            } else if planner.tasks().is_empty() {
                println!("No tasks yet.");
            } else {
                for task in planner.tasks() {
                    println!("{} {} [{}] {}", task.color, task.title, task.rule, task.id);
                }
            }
        }
    }
    Ok(())
}
