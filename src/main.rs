// cmdrunner - runs recurring shell commands on a weekly schedule
// Main entry point

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cmdrunner::cli::{self, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Cli::parse();
    match args.command {
        Commands::Run {
            tasks_file,
            config_file,
        } => cli::run_tasks(&tasks_file, &config_file).await,
        Commands::CreateTask { tasks_file } => cli::create_task(&tasks_file),
    }
}
