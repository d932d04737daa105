//! Start/stop intervals recorded against tasks.
//!
//! Every function takes the current snapshot and returns a new one. Only the
//! addressed task is rebuilt; the rest are cloned as they are. Unknown ids and
//! invalid states (closing with nothing open, opening twice) leave the
//! snapshot unchanged.

use crate::libs::task::{Task, TimeEntry, TimeTracking};
use chrono::{DateTime, Utc};
use tracing::debug;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Whole minutes between two instants, rounded half up and never negative.
pub fn duration_minutes(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let ms = (end - start).num_milliseconds().max(0);
    (ms as f64 / MS_PER_MINUTE).round() as u64
}

/// Opens a new entry on `task_id`, creating its tracking block if needed.
pub fn start_entry(tasks: &[Task], task_id: &str, estimated_default: u32, now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id != task_id || task.is_tracking() {
                return task.clone();
            }
            let mut task = task.clone();
            let tracking = task.time_tracking.get_or_insert_with(|| TimeTracking::new(estimated_default));
            tracking.entries.push(TimeEntry::open(task_id, now));
            task.updated_at = now;
            debug!(task_id, "time entry opened");
            task
        })
        .collect()
}

/// Closes the running entry on `task_id` and recomputes its actual time.
pub fn stop_entry(tasks: &[Task], task_id: &str, now: DateTime<Utc>) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id != task_id || !task.is_tracking() {
                return task.clone();
            }
            let mut task = task.clone();
            if let Some(tracking) = task.time_tracking.as_mut() {
                if let Some(entry) = tracking.entries.last_mut() {
                    entry.end_time = Some(now);
                    entry.duration = Some(duration_minutes(entry.start_time, now));
                }
                tracking.actual_time = tracking.entries.iter().filter_map(|entry| entry.duration).sum();
                debug!(task_id, actual_time = tracking.actual_time, "time entry closed");
            }
            task.updated_at = now;
            task
        })
        .collect()
}

pub fn open_entry(task: &Task) -> Option<&TimeEntry> {
    task.time_tracking.as_ref().and_then(TimeTracking::open_entry)
}

/// Number of running entries across the whole collection.
pub fn open_entry_count(tasks: &[Task]) -> usize {
    tasks
        .iter()
        .filter_map(|task| task.time_tracking.as_ref())
        .flat_map(|tracking| tracking.entries.iter())
        .filter(|entry| entry.is_open())
        .count()
}

/// Recorded minutes plus the live part of a running entry.
pub fn elapsed_minutes(task: &Task, now: DateTime<Utc>) -> u64 {
    let Some(tracking) = task.time_tracking.as_ref() else {
        return 0;
    };
    let running = tracking
        .open_entry()
        .map(|entry| duration_minutes(entry.start_time, now))
        .unwrap_or(0);
    tracking.actual_time + running
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn rounds_to_nearest_minute() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(duration_minutes(start, start + Duration::seconds(29)), 0);
        assert_eq!(duration_minutes(start, start + Duration::seconds(30)), 1);
        assert_eq!(duration_minutes(start, start + Duration::seconds(89)), 1);
        assert_eq!(duration_minutes(start, start + Duration::minutes(45)), 45);
    }

    #[test]
    fn clock_going_backwards_clamps_to_zero() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(duration_minutes(start, start - Duration::minutes(3)), 0);
    }
}
