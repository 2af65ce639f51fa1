// Scheduler daemon loop
//
// Each cycle: select the tasks whose activation window is open, run
// them concurrently with a bounded number of workers, fold the updated
// records back into the master set, then sleep for the check interval.

use chrono::{DateTime, Local};
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::executor;
use crate::tasks::Task;

/// Owns the master task set and drives the scheduling cycle.
///
/// Only the runner ever mutates the set: workers receive an owned copy
/// of their task and return a new value for reconciliation.
pub struct Runner {
    tasks: Vec<Task>,
    check_interval: Duration,
    worker_count: usize,
}

impl Runner {
    pub fn new(tasks: Vec<Task>, config: &Config) -> Self {
        Self {
            tasks,
            check_interval: Duration::from_secs(config.check_interval),
            worker_count: config.worker_count,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Run the scheduler forever. Never returns; the process is expected
    /// to be killed to stop it.
    pub async fn run(&mut self) {
        info!(
            count = self.tasks.len(),
            interval_secs = self.check_interval.as_secs(),
            workers = self.worker_count,
            "Scheduler started"
        );
        for task in &self.tasks {
            info!(command = %task.command, owner = %task.owner, days = %task.days, "Loaded task");
        }

        loop {
            self.run_cycle(Local::now()).await;
            tokio::time::sleep(self.check_interval).await;
        }
    }

    /// One Select → Dispatch → Reconcile pass, evaluated at `now`.
    ///
    /// Blocks until every dispatched task has completed; reconciliation
    /// finishes before the next cycle can start. Per-task failures are
    /// isolated — one task can never abort another or the loop itself.
    pub async fn run_cycle(&mut self, now: DateTime<Local>) {
        let active: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.is_active_at(now))
            .cloned()
            .collect();

        if active.is_empty() {
            debug!("No active tasks this cycle");
            return;
        }

        for task in &active {
            info!(command = %task.command, owner = %task.owner, "Task is active");
        }

        let results: Vec<_> = stream::iter(active.into_iter().map(executor::execute))
            .buffer_unordered(self.worker_count)
            .collect()
            .await;

        for result in results {
            match result {
                Ok(task) => self.reconcile(task),
                Err(e) => {
                    // Task keeps its previous last_execution and will be
                    // retried on its next active cycle
                    error!(error = %e, "Task could not be launched");
                }
            }
        }
    }

    /// Replace the master entry for the returned task, matching by id.
    fn reconcile(&mut self, updated: Task) {
        match self.tasks.iter_mut().find(|task| task.id == updated.id) {
            Some(slot) => *slot = updated,
            None => {
                error!(command = %updated.command, "Dispatched task missing from master set");
            }
        }
    }
}
