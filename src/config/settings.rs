// Runtime configuration

use anyhow::{bail, Result};
use serde::Deserialize;

fn default_worker_count() -> usize {
    4
}

/// Scheduler configuration, read from the `[command_runner]` table of
/// the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Seconds to sleep between scheduling cycles.
    pub check_interval: u64,
    /// Maximum number of task commands running at once.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.worker_count == 0 {
            bail!("worker_count must be at least 1");
        }
        Ok(())
    }
}
