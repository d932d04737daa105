//! The ordered, in-memory task collection.
//!
//! Every mutation builds a fresh `Vec<Task>` and swaps it in, so a snapshot
//! handed out earlier (for analytics or rendering) never changes under the
//! reader. Unknown ids and out-of-range indices are silent no-ops; mutators
//! report whether anything happened through their return value.

use crate::libs::task::{generate_id, Task, TaskDraft, TaskPatch, TaskPriority, TaskStatus, TimeTracking};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Values `create` falls back to when a draft leaves them open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDefaults {
    pub time_tracking: bool,
    pub estimated_time: u32,
    pub priority: TaskPriority,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            time_tracking: true,
            estimated_time: 30,
            priority: TaskPriority::Medium,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks with `status`, in collection order.
    pub fn bucket(&self, status: TaskStatus) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.status == status).collect()
    }

    /// Swaps in a snapshot produced elsewhere (the tracking session).
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Applies `edit` to a copy of task `id` and swaps in the new snapshot.
    fn modify<F>(&mut self, id: &str, edit: F) -> bool
    where
        F: FnOnce(&mut Task) -> bool,
    {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let mut tasks = self.tasks.clone();
        if !edit(&mut tasks[pos]) {
            return false;
        }
        self.tasks = tasks;
        true
    }

    pub fn create(&mut self, draft: TaskDraft, defaults: &TaskDefaults, now: DateTime<Utc>) -> Task {
        let time_tracking = defaults
            .time_tracking
            .then(|| TimeTracking::new(draft.estimated_time.unwrap_or(defaults.estimated_time)));
        let task = Task {
            id: self.fresh_id(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority.unwrap_or(defaults.priority),
            completed: false,
            status: TaskStatus::Pending,
            tags: draft.tags,
            time_tracking,
            recurrence: draft.recurrence,
            previous_status: None,
            created_at: now,
            updated_at: now,
        };

        let mut tasks = self.tasks.clone();
        tasks.push(task.clone());
        self.tasks = tasks;
        debug!(task_id = %task.id, "task created");
        task
    }

    /// Completes an open task, or reopens a completed one into the bucket it
    /// was completed from. Returns the new status.
    pub fn toggle_complete(&mut self, id: &str, now: DateTime<Utc>) -> Option<TaskStatus> {
        let task = self.get(id)?;
        let next = if task.completed {
            task.previous_status.filter(|status| !status.is_completed()).unwrap_or(TaskStatus::Pending)
        } else {
            TaskStatus::Completed
        };
        self.set_status(id, next, now);
        Some(next)
    }

    pub fn set_status(&mut self, id: &str, status: TaskStatus, now: DateTime<Utc>) -> bool {
        let changed = self.modify(id, |task| task.set_status(status, now));
        if changed {
            debug!(task_id = id, %status, "status changed");
        }
        changed
    }

    /// Moves the task at `source` to `dest` within the full sequence.
    pub fn reorder(&mut self, source: usize, dest: usize) -> bool {
        if source >= self.tasks.len() || dest >= self.tasks.len() {
            return false;
        }
        if source == dest {
            return true;
        }
        let mut tasks = self.tasks.clone();
        let moved = tasks.remove(source);
        tasks.insert(dest, moved);
        self.tasks = tasks;
        debug!(source, dest, "tasks reordered");
        true
    }

    /// Reorders among tasks with `status` only.
    ///
    /// The slots the bucket occupies in the full sequence stay where they
    /// are; only the bucket members are permuted across them.
    pub fn reorder_within_bucket(&mut self, status: TaskStatus, source: usize, dest: usize) -> bool {
        let slots: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status == status)
            .map(|(pos, _)| pos)
            .collect();
        if source >= slots.len() || dest >= slots.len() {
            return false;
        }

        let mut members: Vec<Task> = slots.iter().map(|&pos| self.tasks[pos].clone()).collect();
        let moved = members.remove(source);
        members.insert(dest, moved);

        let mut tasks = self.tasks.clone();
        for (pos, task) in slots.into_iter().zip(members) {
            tasks[pos] = task;
        }
        self.tasks = tasks;
        debug!(%status, source, dest, "bucket reordered");
        true
    }

    /// Changes the task's status and places it at `dest_index` inside the
    /// destination bucket.
    ///
    /// A missing or past-the-end index appends after the bucket's last
    /// member. Moving into an empty bucket keeps the task's place in the full
    /// sequence.
    pub fn move_between_buckets(
        &mut self,
        id: &str,
        dest_status: TaskStatus,
        dest_index: Option<usize>,
        now: DateTime<Utc>,
    ) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };

        let mut tasks = self.tasks.clone();
        let mut task = tasks.remove(pos);
        task.set_status(dest_status, now);

        let slots: Vec<usize> = tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.status == dest_status)
            .map(|(pos, _)| pos)
            .collect();
        let insert_at = match dest_index.and_then(|index| slots.get(index)) {
            Some(&slot) => slot,
            None => slots.last().map(|&slot| slot + 1).unwrap_or(pos),
        };
        tasks.insert(insert_at, task);
        self.tasks = tasks;
        debug!(task_id = id, status = %dest_status, ?dest_index, "task moved between buckets");
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Task> {
        let pos = self.position(id)?;
        let mut tasks = self.tasks.clone();
        let removed = tasks.remove(pos);
        self.tasks = tasks;
        debug!(task_id = id, "task removed");
        Some(removed)
    }

    pub fn add_tag(&mut self, id: &str, tag_id: &str, now: DateTime<Utc>) -> bool {
        self.modify(id, |task| {
            if task.tags.iter().any(|tag| tag == tag_id) {
                return false;
            }
            task.tags.push(tag_id.to_string());
            task.updated_at = now;
            true
        })
    }

    pub fn remove_tag(&mut self, id: &str, tag_id: &str, now: DateTime<Utc>) -> bool {
        self.modify(id, |task| {
            let before = task.tags.len();
            task.tags.retain(|tag| tag != tag_id);
            if task.tags.len() == before {
                return false;
            }
            task.updated_at = now;
            true
        })
    }

    pub fn update_details(&mut self, id: &str, patch: TaskPatch, now: DateTime<Utc>) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.modify(id, |task| {
            if let Some(title) = patch.title {
                task.title = title;
            }
            if let Some(description) = patch.description {
                task.description = description;
            }
            if let Some(due_date) = patch.due_date {
                task.due_date = Some(due_date);
            }
            if let Some(priority) = patch.priority {
                task.priority = priority;
            }
            if let Some(recurrence) = patch.recurrence {
                task.recurrence = Some(recurrence);
            }
            if let Some(estimate) = patch.estimated_time {
                task.time_tracking.get_or_insert_with(|| TimeTracking::new(estimate)).estimated_time = estimate;
            }
            task.updated_at = now;
            true
        })
    }
}
