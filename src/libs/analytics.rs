//! Task analytics derived from a snapshot.
//!
//! Nothing is cached: every call walks the collection once, so the numbers
//! can never drift from the tasks they describe.
//!
//! ## Counting rules
//!
//! ```text
//! overdue  = due_date <  now && !completed
//! upcoming = due_date >  now && !completed
//! ```
//!
//! A completed task is neither overdue nor upcoming, and a task without a due
//! date is neither as well.

use crate::libs::task::{Task, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityDistribution {
    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskAnalytics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub overdue_tasks: usize,
    pub upcoming_tasks: usize,
    pub priority_distribution: PriorityDistribution,
    /// Sum of recorded minutes across all tasks.
    pub tracked_minutes: u64,
    /// Sum of estimated minutes across all tasks.
    pub estimated_minutes: u64,
}

impl TaskAnalytics {
    /// Bar chart rows, highest priority first.
    pub fn priority_chart(&self) -> Vec<(&'static str, usize)> {
        let dist = &self.priority_distribution;
        vec![("High", dist.high), ("Medium", dist.medium), ("Low", dist.low)]
    }

    /// Share of completed tasks, 0-100.
    pub fn completion_rate(&self) -> f64 {
        if self.total_tasks == 0 {
            return 0.0;
        }
        (self.completed_tasks as f64 / self.total_tasks as f64 * 100.0).clamp(0.0, 100.0)
    }
}

pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> TaskAnalytics {
    tasks.iter().fold(TaskAnalytics::default(), |mut stats, task| {
        stats.total_tasks += 1;
        if task.completed {
            stats.completed_tasks += 1;
        }
        if task.status == TaskStatus::InProgress {
            stats.in_progress_tasks += 1;
        }
        if task.is_overdue_at(now) {
            stats.overdue_tasks += 1;
        }
        if task.is_upcoming_at(now) {
            stats.upcoming_tasks += 1;
        }
        match task.priority {
            TaskPriority::High => stats.priority_distribution.high += 1,
            TaskPriority::Medium => stats.priority_distribution.medium += 1,
            TaskPriority::Low => stats.priority_distribution.low += 1,
        }
        if let Some(tracking) = &task.time_tracking {
            stats.tracked_minutes += tracking.actual_time;
            stats.estimated_minutes += u64::from(tracking.estimated_time);
        }
        stats
    })
}
