//! Month view commands for CLI.

use std::fmt::Write as _;

use chrono::{Month, Weekday};
use clap::Subcommand;
use taskcal_core::{Config, MonthGrid, MonthRef, TaskDefinition};

use super::load_planner;

#[derive(Subcommand)]
pub enum MonthAction {
    /// Show a month grid with its assignments
    Show {
        /// Month as YYYY-MM (default: current month)
        month: Option<MonthRef>,
        /// Move the month forwards or backwards, e.g. --shift=-1
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        shift: i32,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: MonthAction) -> Result<(), Box<dyn std::error::Error>> {
    let (_store, planner) = load_planner()?;

    match action {
        MonthAction::Show { month, shift, json } => {
            let config = Config::load_or_default();
            let month = match month {
                Some(month) => month,
                None => MonthRef::current()?,
            }
            .shift(shift)?;
            let grid = planner.month_grid(month, config.calendar.week_start, &config.holidays);

            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", render(&grid, planner.tasks()));
            }
        }
    }
    Ok(())
}

fn month_title(month: MonthRef) -> String {
    let name = u8::try_from(month.month_number())
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|m| m.name().to_string())
        .unwrap_or_else(|| month.to_string());
    format!("{name} {}", month.year())
}

fn weekday_abbrev(day: Weekday) -> &'static str {
    match day {
        Weekday::Sun => "Su",
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
    }
}

/// Plain-text month view: calendar block, per-day agenda, holidays and legend.
/// Holidays are marked with `*` in the calendar block.
pub fn render(grid: &MonthGrid, tasks: &[TaskDefinition]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", month_title(grid.month));

    let header: Vec<&str> = grid
        .week_start
        .columns()
        .iter()
        .map(|d| weekday_abbrev(*d))
        .collect();
    let _ = writeln!(out, "{}", header.iter().map(|h| format!(" {h} ")).collect::<String>());

    for week in grid.weeks() {
        let line: String = week
            .iter()
            .map(|cell| match cell {
                Some(c) if c.holiday.is_some() => format!("{:>3}*", c.day),
                Some(c) => format!("{:>3} ", c.day),
                None => "    ".to_string(),
            })
            .collect();
        let _ = writeln!(out, "{}", line.trim_end());
    }

    out.push('\n');
    let mut any = false;
    for cell in grid.days.iter().filter(|c| !c.assignments.is_empty()) {
        any = true;
        let items: Vec<String> = cell
            .assignments
            .iter()
            .map(|a| format!("{} ({})", a.title, a.person_name))
            .collect();
        let _ = writeln!(out, "{}  {}", cell.date_key, items.join(", "));
    }
    if !any {
        let _ = writeln!(out, "No assignments this month.");
    }

    let holidays: Vec<_> = grid.days.iter().filter(|c| c.holiday.is_some()).collect();
    if !holidays.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Holidays:");
        for cell in holidays {
            let _ = writeln!(out, "  {}  {}", cell.date_key, cell.holiday.as_deref().unwrap_or(""));
        }
    }

    if !tasks.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Legend:");
        for task in tasks {
            let _ = writeln!(out, "  {}  {} [{}]", task.color, task.title, task.rule);
        }
    }

    out
}
