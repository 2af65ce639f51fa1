// Task records: static definition plus last-execution state

use chrono::{DateTime, Datelike, Duration, Local, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::tasks::days::ActiveDays;

/// A task definition that could not be turned into a runnable task.
///
/// Reported (and the row skipped) at load time; never fatal.
#[derive(Debug, Error)]
pub enum TaskParseError {
    #[error("invalid {field} value {value:?} (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },

    #[error("invalid reload_time value {value:?} (expected HH:MM)")]
    InvalidCooldown { value: String },
}

/// Raw task record as persisted in the task file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRow {
    pub command: String,
    pub owner: String,
    pub days: String,
    pub time_start: String,
    pub time_end: String,
    pub reload_time: String,
}

/// A scheduled shell command.
///
/// Everything except `last_execution` is fixed at load time.
/// `last_execution` is stamped by the executor after each run and is the
/// only field the scheduler loop ever updates.
#[derive(Debug, Clone)]
pub struct Task {
    /// Stable identity assigned at load time; reconciliation matches on
    /// this so duplicate definitions stay unambiguous.
    pub id: Uuid,
    pub command: String,
    pub owner: String,
    /// Raw day pattern, kept for display and round-tripping.
    pub days: String,
    pub active_days: ActiveDays,
    pub window_start: NaiveTime,
    pub window_end: NaiveTime,
    /// Minimum elapsed time since the last execution before the task may
    /// run again.
    pub cooldown: Duration,
    pub last_execution: Option<DateTime<Local>>,
}

/// Equality covers the definitional fields only. `id`, the derived day
/// mask, and `last_execution` are excluded, so a task compares equal to
/// itself after an execution updates its timestamp.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.command == other.command
            && self.owner == other.owner
            && self.days == other.days
            && self.window_start == other.window_start
            && self.window_end == other.window_end
            && self.cooldown == other.cooldown
    }
}

impl Task {
    /// Build a task from a raw row, validating the time fields.
    pub fn from_row(row: &TaskRow) -> Result<Self, TaskParseError> {
        Ok(Self {
            id: Uuid::new_v4(),
            command: row.command.clone(),
            owner: row.owner.clone(),
            days: row.days.clone(),
            active_days: ActiveDays::parse(&row.days),
            window_start: parse_clock("time_start", &row.time_start)?,
            window_end: parse_clock("time_end", &row.time_end)?,
            cooldown: parse_cooldown(&row.reload_time)?,
            last_execution: None,
        })
    }

    /// Whether the task should run at the given instant: its weekday is
    /// active, the instant falls strictly inside the daily window, and
    /// the cooldown since the last execution has been strictly exceeded.
    ///
    /// Pure; `now` is injected so tests can pin the clock.
    pub fn is_active_at(&self, now: DateTime<Local>) -> bool {
        let today = now.date_naive();
        let window_start = today.and_time(self.window_start);
        let window_end = today.and_time(self.window_end);
        let now_local = now.naive_local();

        let outside_cooldown = match self.last_execution {
            Some(last) => now - last > self.cooldown,
            None => true,
        };

        let weekday = now.weekday().num_days_from_monday() as usize;

        self.active_days.is_active_on(weekday)
            && window_start < now_local
            && now_local < window_end
            && outside_cooldown
    }
}

fn parse_clock(field: &'static str, value: &str) -> Result<NaiveTime, TaskParseError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| TaskParseError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Parse a cooldown given as "HH:MM". Hours are not bounded by 24, so
/// "48:00" is a valid two-day cooldown.
fn parse_cooldown(value: &str) -> Result<Duration, TaskParseError> {
    let invalid = || TaskParseError::InvalidCooldown {
        value: value.to_string(),
    };
    let (hours, minutes) = value.trim().split_once(':').ok_or_else(invalid)?;
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    Ok(Duration::hours(hours) + Duration::minutes(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_row(command: &str) -> TaskRow {
        TaskRow {
            command: command.to_string(),
            owner: "zt".to_string(),
            days: "motuwethfrsasu".to_string(),
            time_start: "00:00".to_string(),
            time_end: "23:59".to_string(),
            reload_time: "06:00".to_string(),
        }
    }

    fn make_task(command: &str) -> Task {
        Task::from_row(&make_row(command)).unwrap()
    }

    // 2024-01-01 was a Monday
    fn monday_at(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 1, 1, hour, min, sec).unwrap()
    }

    #[test]
    fn test_from_row_parses_fields() {
        let task = make_task("ls");
        assert_eq!(task.command, "ls");
        assert_eq!(task.window_start, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(task.window_end, NaiveTime::from_hms_opt(23, 59, 0).unwrap());
        assert_eq!(task.cooldown, Duration::hours(6));
        assert!(task.last_execution.is_none());
    }

    #[test]
    fn test_from_row_rejects_bad_window_times() {
        let mut row = make_row("ls");
        row.time_start = "25:99".to_string();
        assert!(matches!(
            Task::from_row(&row),
            Err(TaskParseError::InvalidTime { field: "time_start", .. })
        ));

        let mut row = make_row("ls");
        row.time_end = "noon".to_string();
        assert!(matches!(
            Task::from_row(&row),
            Err(TaskParseError::InvalidTime { field: "time_end", .. })
        ));
    }

    #[test]
    fn test_from_row_rejects_bad_cooldown() {
        for bad in ["", "06", "six:00", "06:xx"] {
            let mut row = make_row("ls");
            row.reload_time = bad.to_string();
            assert!(
                matches!(Task::from_row(&row), Err(TaskParseError::InvalidCooldown { .. })),
                "reload_time {:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_long_cooldown_allowed() {
        let mut row = make_row("ls");
        row.reload_time = "48:30".to_string();
        let task = Task::from_row(&row).unwrap();
        assert_eq!(task.cooldown, Duration::hours(48) + Duration::minutes(30));
    }

    #[test]
    fn test_equality_ignores_last_execution_and_id() {
        let mut a = make_task("ls");
        let b = make_task("ls");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);

        a.last_execution = Some(monday_at(12, 0, 0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_respects_definition_fields() {
        let a = make_task("ls");
        let b = make_task("ls -la");
        assert_ne!(a, b);

        let mut c = make_task("ls");
        c.owner = "other".to_string();
        assert_ne!(a, c);
    }

    #[test]
    fn test_window_boundaries_are_strict() {
        let mut row = make_row("ls");
        row.time_start = "00:00".to_string();
        row.time_end = "00:01".to_string();
        let task = Task::from_row(&row).unwrap();

        assert!(!task.is_active_at(monday_at(0, 0, 0))); // exactly at start
        assert!(task.is_active_at(monday_at(0, 0, 30))); // inside
        assert!(!task.is_active_at(monday_at(0, 1, 0))); // exactly at end
        assert!(!task.is_active_at(monday_at(0, 2, 0))); // past the window
    }

    #[test]
    fn test_inactive_day_blocks_window() {
        let mut row = make_row("ls");
        row.days = "--tuwethfrsasu".to_string(); // every day except Monday
        let task = Task::from_row(&row).unwrap();
        assert!(!task.is_active_at(monday_at(12, 0, 0)));
    }

    #[test]
    fn test_short_day_pattern_does_not_panic() {
        let mut row = make_row("ls");
        row.days = "mo".to_string();
        let task = Task::from_row(&row).unwrap();
        // Sunday index is past the parsed mask; must be inactive, not a panic
        let sunday = Local.with_ymd_and_hms(2024, 1, 7, 12, 0, 0).unwrap();
        assert!(!task.is_active_at(sunday));
        assert!(task.is_active_at(monday_at(12, 0, 0)));
    }

    #[test]
    fn test_cooldown_is_strict() {
        let now = monday_at(12, 0, 0);
        let mut task = make_task("ls");

        // Exactly the cooldown ago: still inside, not eligible
        task.last_execution = Some(now - task.cooldown);
        assert!(!task.is_active_at(now));

        // One second beyond: eligible
        task.last_execution = Some(now - task.cooldown - Duration::seconds(1));
        assert!(task.is_active_at(now));
    }

    #[test]
    fn test_no_prior_execution_is_outside_cooldown() {
        let task = make_task("ls");
        assert!(task.is_active_at(monday_at(12, 0, 0)));
    }
}
