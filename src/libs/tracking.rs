//! Single-timer tracking session.
//!
//! [`TrackingSession`] owns the id of the task being timed and is the only
//! caller of [`ledger::start_entry`] and [`ledger::stop_entry`]. Switching from
//! one task to another closes the old entry and opens the new one in a single
//! call, so a snapshot with two running entries is never handed back.

use crate::libs::ledger;
use crate::libs::task::Task;
use chrono::{DateTime, Utc};
use tracing::info;

/// What a tracking call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingChange {
    Started { task_id: String },
    Stopped { task_id: String, minutes: u64 },
    Switched { from: String, to: String },
    /// Time tracking is turned off in preferences.
    Disabled,
    /// The task does not exist.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingSession {
    current: Option<String>,
    enabled: bool,
    default_estimate: u32,
}

impl Default for TrackingSession {
    fn default() -> Self {
        Self::new(true, 30)
    }
}

impl TrackingSession {
    pub fn new(enabled: bool, default_estimate: u32) -> Self {
        Self {
            current: None,
            enabled,
            default_estimate,
        }
    }

    /// Restores a session from a saved snapshot.
    ///
    /// The tracked id is only kept when that task really has a running entry.
    /// With tracking disabled a running entry is closed at `now` instead.
    pub fn resume(tasks: &[Task], enabled: bool, default_estimate: u32, now: DateTime<Utc>) -> (Vec<Task>, Self) {
        let running = tasks.iter().find(|task| task.is_tracking()).map(|task| task.id.clone());
        let mut session = Self::new(enabled, default_estimate);
        match running {
            Some(task_id) if !enabled => {
                info!(task_id = %task_id, "closing running entry, tracking is disabled");
                (ledger::stop_entry(tasks, &task_id, now), session)
            }
            running => {
                session.current = running;
                (tasks.to_vec(), session)
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn configure(&mut self, enabled: bool, default_estimate: u32) {
        self.enabled = enabled;
        self.default_estimate = default_estimate;
    }

    pub fn default_estimate(&self) -> u32 {
        self.default_estimate
    }

    /// Starts, stops or switches the timer for `task_id`.
    pub fn toggle(&mut self, tasks: &[Task], task_id: &str, now: DateTime<Utc>) -> (Vec<Task>, TrackingChange) {
        if !self.enabled {
            return (tasks.to_vec(), TrackingChange::Disabled);
        }

        if self.current.as_deref() == Some(task_id) {
            return match self.stop(tasks, now) {
                (tasks, Some(change)) => (tasks, change),
                (tasks, None) => (tasks, TrackingChange::Ignored),
            };
        }

        if !tasks.iter().any(|task| task.id == task_id) {
            return (tasks.to_vec(), TrackingChange::Ignored);
        }

        let previous = self.current.take();
        let tasks = match previous.as_deref() {
            Some(previous) => ledger::stop_entry(tasks, previous, now),
            None => tasks.to_vec(),
        };
        let tasks = ledger::start_entry(&tasks, task_id, self.default_estimate, now);
        self.current = Some(task_id.to_string());

        let change = match previous {
            Some(from) => {
                info!(from = %from, to = task_id, "tracking switched");
                TrackingChange::Switched {
                    from,
                    to: task_id.to_string(),
                }
            }
            None => {
                info!(task_id, "tracking started");
                TrackingChange::Started {
                    task_id: task_id.to_string(),
                }
            }
        };
        (tasks, change)
    }

    /// Closes the running entry, if any.
    pub fn stop(&mut self, tasks: &[Task], now: DateTime<Utc>) -> (Vec<Task>, Option<TrackingChange>) {
        let Some(task_id) = self.current.take() else {
            return (tasks.to_vec(), None);
        };
        let tasks = ledger::stop_entry(tasks, &task_id, now);
        let minutes = tasks
            .iter()
            .find(|task| task.id == task_id)
            .and_then(|task| task.time_tracking.as_ref())
            .and_then(|tracking| tracking.entries.last())
            .and_then(|entry| entry.duration)
            .unwrap_or(0);
        info!(task_id = %task_id, minutes, "tracking stopped");
        (tasks, Some(TrackingChange::Stopped { task_id, minutes }))
    }

    /// Forgets `task_id` without touching entries, for tasks that were deleted.
    pub fn release(&mut self, task_id: &str) -> bool {
        if self.current.as_deref() == Some(task_id) {
            self.current = None;
            return true;
        }
        false
    }
}
