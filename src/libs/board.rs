//! Drag-and-drop reconciliation for the list and kanban views.
//!
//! A drop names where an item was picked up and where it landed. In list
//! mode both are indices into the full sequence; in kanban mode they are a
//! bucket id (a status) plus an index inside that bucket.

use crate::libs::store::TaskStore;
use crate::libs::task::{Task, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Droppable id of the single list-view container.
pub const LIST_DROPPABLE_ID: &str = "tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Kanban,
    Calendar,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::List => "list",
            ViewMode::Kanban => "kanban",
            ViewMode::Calendar => "calendar",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(ViewMode::List),
            "kanban" => Ok(ViewMode::Kanban),
            "calendar" => Ok(ViewMode::Calendar),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DropLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }

    pub fn list(index: usize) -> Self {
        Self::new(LIST_DROPPABLE_ID, index)
    }

    pub fn bucket(status: TaskStatus, index: usize) -> Self {
        Self::new(status.as_str(), index)
    }
}

/// Parses `INDEX` (list) or `BUCKET:INDEX` (kanban).
impl FromStr for DropLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, index) = match s.rsplit_once(':') {
            Some((id, index)) => (id.trim(), index),
            None => (LIST_DROPPABLE_ID, s),
        };
        let index = index.trim().parse::<usize>().map_err(|_| s.to_string())?;
        Ok(DropLocation::new(id, index))
    }
}

/// The end of a drag. `destination` is `None` when the item was dropped
/// outside any container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    Reordered,
    ReorderedInBucket(TaskStatus),
    Moved {
        task_id: String,
        from: TaskStatus,
        to: TaskStatus,
    },
    /// The drop changed nothing.
    Ignored,
}

fn bucket_status(droppable_id: &str) -> Option<TaskStatus> {
    TaskStatus::ALL.into_iter().find(|status| status.as_str() == droppable_id)
}

/// Applies a finished drag to the store.
pub fn apply_drop(store: &mut TaskStore, mode: ViewMode, event: &DropEvent, now: DateTime<Utc>) -> DropOutcome {
    let Some(destination) = &event.destination else {
        debug!("drop without destination");
        return DropOutcome::Ignored;
    };

    match mode {
        ViewMode::List => {
            if event.source.droppable_id != LIST_DROPPABLE_ID || destination.droppable_id != LIST_DROPPABLE_ID {
                return DropOutcome::Ignored;
            }
            if store.reorder(event.source.index, destination.index) {
                DropOutcome::Reordered
            } else {
                DropOutcome::Ignored
            }
        }
        ViewMode::Kanban => {
            let (Some(from), Some(to)) = (bucket_status(&event.source.droppable_id), bucket_status(&destination.droppable_id))
            else {
                return DropOutcome::Ignored;
            };
            if from == to {
                return if store.reorder_within_bucket(from, event.source.index, destination.index) {
                    DropOutcome::ReorderedInBucket(from)
                } else {
                    DropOutcome::Ignored
                };
            }
            let Some(task_id) = store.bucket(from).get(event.source.index).map(|task| task.id.clone()) else {
                return DropOutcome::Ignored;
            };
            store.move_between_buckets(&task_id, to, Some(destination.index), now);
            DropOutcome::Moved { task_id, from, to }
        }
        ViewMode::Calendar => DropOutcome::Ignored,
    }
}

/// Tasks as the list view shows them, each with its index in the full
/// sequence. List drops address that index even when rows are hidden.
pub fn list_view(tasks: &[Task], show_completed: bool) -> Vec<(usize, &Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| show_completed || !task.completed)
        .collect()
}

/// The four kanban columns in display order.
pub fn kanban_columns(tasks: &[Task]) -> Vec<(TaskStatus, Vec<&Task>)> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| (status, tasks.iter().filter(|task| task.status == status).collect()))
        .collect()
}

/// Whether cards in this column offer start/stop tracking.
pub fn shows_tracking_controls(status: TaskStatus) -> bool {
    !status.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_drop_locations() {
        assert_eq!("3".parse::<DropLocation>(), Ok(DropLocation::list(3)));
        assert_eq!(
            "in-progress:0".parse::<DropLocation>(),
            Ok(DropLocation::bucket(TaskStatus::InProgress, 0))
        );
        assert!("pending:x".parse::<DropLocation>().is_err());
    }

    #[test]
    fn unknown_bucket_ids_do_not_resolve() {
        assert_eq!(bucket_status("done"), None);
        assert_eq!(bucket_status("overdue"), Some(TaskStatus::Overdue));
    }
}
