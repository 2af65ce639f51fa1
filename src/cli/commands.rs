// Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_LOCATION: &str = "/etc/command_runner/command_runner.toml";
pub const DEFAULT_TASKS_LOCATION: &str = "/etc/command_runner/tasks.csv";

#[derive(Parser)]
#[command(name = "cmdrunner", version, about = "Run recurring shell commands on a schedule")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scheduler loop
    Run {
        /// CSV file holding the task definitions
        #[arg(long, default_value = DEFAULT_TASKS_LOCATION)]
        tasks_file: PathBuf,

        /// TOML config file with the check interval
        #[arg(long, default_value = DEFAULT_CONFIG_LOCATION)]
        config_file: PathBuf,
    },

    /// Interactively create a task and append it to the task file
    CreateTask {
        /// CSV file holding the task definitions
        #[arg(long, default_value = DEFAULT_TASKS_LOCATION)]
        tasks_file: PathBuf,
    },
}
