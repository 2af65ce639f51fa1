// Task executor - runs a single task's command as a shell subprocess

use chrono::Local;
use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

use crate::tasks::Task;

/// Cap on captured output carried into log lines.
const MAX_LOGGED_OUTPUT: usize = 2_000;

/// The shell itself could not be invoked. Ordinary command failures
/// (non-zero exit, stderr output) are not errors — they are logged and
/// the task's cooldown still applies.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch shell for command {command:?}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

/// Run the task's command via `sh -c`, capturing output, and return the
/// task with `last_execution` stamped at completion.
///
/// Takes an owned snapshot and returns a new value; the caller folds it
/// back into the master set. On a launch failure the caller keeps its
/// previous value, so the task retries on the next active cycle.
pub async fn execute(mut task: Task) -> Result<Task, ExecError> {
    info!(command = %task.command, owner = %task.owner, "Executing task");

    let output = Command::new("sh")
        .arg("-c")
        .arg(&task.command)
        .output()
        .await
        .map_err(|source| ExecError::Launch {
            command: task.command.clone(),
            source,
        })?;

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if output.status.success() && stderr.is_empty() {
        info!(
            command = %task.command,
            stdout = %truncate(&stdout),
            "Task completed"
        );
    } else {
        warn!(
            command = %task.command,
            exit_code,
            stdout = %truncate(&stdout),
            stderr = %truncate(&stderr),
            "Task command reported a failure"
        );
    }

    // A failed run still counts for the cooldown — no retry-sooner policy
    task.last_execution = Some(Local::now());
    Ok(task)
}

fn truncate(output: &str) -> &str {
    let trimmed = output.trim_end();
    match trimmed.char_indices().nth(MAX_LOGGED_OUTPUT) {
        Some((index, _)) => &trimmed[..index],
        None => trimmed,
    }
}
