// Task file loading and appending
//
// The task file is headered CSV with one row per task:
// command,owner,days,time_start,time_end,reload_time

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{info, warn};

use crate::tasks::record::{Task, TaskRow};

/// Load all tasks from the task file.
///
/// A missing or unreadable file is an error (fatal at startup). Rows
/// that cannot be parsed are logged with the reason and skipped; the
/// rest of the file still loads.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open task file: {}", path.display()))?;

    let mut tasks = Vec::new();
    for record in reader.deserialize() {
        let row: TaskRow = match record {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, "Skipping unreadable task row");
                continue;
            }
        };
        match Task::from_row(&row) {
            Ok(task) => tasks.push(task),
            Err(e) => {
                warn!(command = %row.command, owner = %row.owner, error = %e,
                      "Skipping malformed task definition");
            }
        }
    }

    info!(count = tasks.len(), path = %path.display(), "Loaded tasks");
    Ok(tasks)
}

/// Append a task row to the task file, writing the CSV header first when
/// the file does not exist yet.
pub fn append_task(path: &Path, row: &TaskRow) -> Result<()> {
    let write_header = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open task file for writing: {}", path.display()))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer
        .serialize(row)
        .with_context(|| format!("Failed to write task to: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
