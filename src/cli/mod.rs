// CLI entry points for the run and create-task subcommands

mod commands;

pub use commands::{Cli, Commands, DEFAULT_CONFIG_LOCATION, DEFAULT_TASKS_LOCATION};

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::config::load_config;
use crate::scheduling::Runner;
use crate::tasks::{append_task, load_tasks, Task, TaskRow};

/// Load config and tasks, then run the scheduler loop forever.
pub async fn run_tasks(tasks_file: &Path, config_file: &Path) -> Result<()> {
    let config = load_config(config_file)?;
    let tasks = load_tasks(tasks_file)?;

    let mut runner = Runner::new(tasks, &config);
    runner.run().await;
    Ok(())
}

/// Prompt for a task definition on stdin and append it to the task file.
///
/// The definition is validated before anything is written, so a typo in
/// a time field is reported instead of producing a row the scheduler
/// would skip on every startup.
pub fn create_task(tasks_file: &Path) -> Result<()> {
    let row = TaskRow {
        command: prompt("Command to run: ")?,
        owner: prompt("Command owner: ")?,
        days: prompt("Days of the week it should execute: ")?,
        time_start: prompt("Start of execution window: ")?,
        time_end: prompt("End of execution window: ")?,
        reload_time: prompt("Time before second execution: ")?,
    };

    Task::from_row(&row).context("Task definition is invalid")?;
    append_task(tasks_file, &row)?;

    println!("Task saved to {}", tasks_file.display());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
