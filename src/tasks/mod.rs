// Task definitions, activation logic, and task-file I/O

pub mod days;
pub mod loader;
pub mod record;

pub use days::ActiveDays;
pub use loader::{append_task, load_tasks};
pub use record::{Task, TaskParseError, TaskRow};
