//! Task records and the values they are built from.

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ID_LEN: usize = 8;

/// Random alphanumeric identifier for tasks, entries and tags.
pub fn generate_id() -> String {
    thread_rng().sample_iter(&Alphanumeric).take(ID_LEN).map(char::from).collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown status '{0}'")]
    Status(String),
    #[error("unknown priority '{0}'")]
    Priority(String),
    #[error("unknown recurrence '{0}'")]
    Recurrence(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            _ => Err(ParseError::Priority(s.to_string())),
        }
    }
}

/// Workflow state of a task. Doubles as the kanban bucket id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    /// Kanban column order.
    pub const ALL: [TaskStatus; 4] = [TaskStatus::Pending, TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Overdue];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }

    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "overdue" => Ok(TaskStatus::Overdue),
            _ => Err(ParseError::Status(s.to_string())),
        }
    }
}

/// One start/stop interval. Open while `end_time` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub task_id: String,
    pub start_time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Whole minutes, present only together with `end_time`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl TimeEntry {
    pub fn open(task_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(),
            task_id: task_id.to_string(),
            start_time: now,
            end_time: None,
            duration: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTracking {
    /// Minutes.
    pub estimated_time: u32,
    /// Minutes, always the sum of closed entry durations.
    pub actual_time: u64,
    pub entries: Vec<TimeEntry>,
}

impl TimeTracking {
    pub fn new(estimated_time: u32) -> Self {
        Self {
            estimated_time,
            actual_time: 0,
            entries: Vec::new(),
        }
    }

    /// The running entry, which can only ever be the last one.
    pub fn open_entry(&self) -> Option<&TimeEntry> {
        self.entries.last().filter(|entry| entry.is_open())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Stored as data only, nothing expands it into occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub frequency: RecurrenceFrequency,
    pub interval: u32,
}

impl FromStr for Recurrence {
    type Err = ParseError;

    /// Accepts `weekly` or `2:weekly` (every two weeks).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (interval, frequency) = match s.split_once(':') {
            Some((n, freq)) => (n.trim().parse::<u32>().map_err(|_| ParseError::Recurrence(s.to_string()))?, freq),
            None => (1, s),
        };
        let frequency = match frequency.trim().to_ascii_lowercase().as_str() {
            "daily" => RecurrenceFrequency::Daily,
            "weekly" => RecurrenceFrequency::Weekly,
            "monthly" => RecurrenceFrequency::Monthly,
            "yearly" => RecurrenceFrequency::Yearly,
            _ => return Err(ParseError::Recurrence(s.to_string())),
        };
        if interval == 0 {
            return Err(ParseError::Recurrence(s.to_string()));
        }
        Ok(Recurrence { frequency, interval })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: TaskPriority,
    pub completed: bool,
    pub status: TaskStatus,
    /// Tag ids. References may dangle after a tag is deleted.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_tracking: Option<TimeTracking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_status: Option<TaskStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Moves the task to `status`, keeping `completed` in step.
    ///
    /// Entering `completed` remembers where the task came from so it can be
    /// reopened into the same bucket. Returns `false` when nothing changed.
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) -> bool {
        if self.status == status && self.completed == status.is_completed() {
            return false;
        }
        if status.is_completed() && !self.status.is_completed() {
            self.previous_status = Some(self.status);
        } else if !status.is_completed() {
            self.previous_status = None;
        }
        self.status = status;
        self.completed = status.is_completed();
        self.updated_at = now;
        true
    }

    pub fn is_tracking(&self) -> bool {
        self.time_tracking.as_ref().and_then(TimeTracking::open_entry).is_some()
    }

    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    pub fn is_upcoming_at(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due > now)
    }
}

/// Input for [`TaskStore::create`](crate::libs::store::TaskStore::create).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    /// Falls back to the configured default when absent.
    pub priority: Option<TaskPriority>,
    pub tags: Vec<String>,
    pub recurrence: Option<Recurrence>,
    /// Overrides the default estimate when time tracking is enabled.
    pub estimated_time: Option<u32>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn due(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    pub fn estimate(mut self, minutes: u32) -> Self {
        self.estimated_time = Some(minutes);
        self
    }
}

/// Field edits applied by `update_details`; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub recurrence: Option<Recurrence>,
    pub estimated_time: Option<u32>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        *self == TaskPatch::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task() -> Task {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        Task {
            id: "t1".into(),
            title: "Plan sprint".into(),
            description: String::new(),
            due_date: None,
            priority: TaskPriority::Medium,
            completed: false,
            status: TaskStatus::InProgress,
            tags: vec![],
            time_tracking: None,
            recurrence: None,
            previous_status: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn set_status_keeps_completed_flag_in_step() {
        let mut task = task();
        let later = task.updated_at + chrono::Duration::minutes(5);

        assert!(task.set_status(TaskStatus::Completed, later));
        assert!(task.completed);
        assert_eq!(task.previous_status, Some(TaskStatus::InProgress));
        assert_eq!(task.updated_at, later);

        assert!(task.set_status(TaskStatus::Overdue, later));
        assert!(!task.completed);
        assert_eq!(task.previous_status, None);

        assert!(!task.set_status(TaskStatus::Overdue, later));
    }

    #[test]
    fn status_parses_bucket_ids() {
        assert_eq!("in-progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert_eq!("IN_PROGRESS".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn recurrence_parses_interval_prefix() {
        let every_two_weeks: Recurrence = "2:weekly".parse().unwrap();
        assert_eq!(every_two_weeks.interval, 2);
        assert_eq!(every_two_weeks.frequency, RecurrenceFrequency::Weekly);
        assert!("0:daily".parse::<Recurrence>().is_err());
    }

    #[test]
    fn generated_ids_are_alphanumeric() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
