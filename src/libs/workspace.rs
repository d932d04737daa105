//! Session facade over the task store.
//!
//! A [`Workspace`] owns the task collection, tag registry, tracking session
//! and preferences, and is the single place user actions enter. Each action
//! reads the clock once, runs the matching store/tracking operation and
//! raises a notification describing what happened.

use crate::api::calendar::CalendarTask;
use crate::libs::analytics::{self, TaskAnalytics};
use crate::libs::board::{self, DropEvent, DropOutcome, ViewMode};
use crate::libs::messages::Message;
use crate::libs::notify::{ConsoleSink, Level, Notification, NotificationSink};
use crate::libs::persistence::{load_json, save_json, PersistenceProvider, StorageError};
use crate::libs::preferences::Preferences;
use crate::libs::store::TaskStore;
use crate::libs::tags::{TagRegistry, TaskTag};
use crate::libs::task::{Task, TaskDraft, TaskPatch, TaskStatus};
use crate::libs::tracking::{TrackingChange, TrackingSession};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const WORKSPACE_KEY: &str = "taskminder-workspace";

/// Everything needed to rebuild a workspace in a later process.
///
/// The tracked task is not stored; it is recovered from the running entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSnapshot {
    pub tasks: Vec<Task>,
    pub tags: Vec<TaskTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
}

pub struct Workspace<S: NotificationSink = ConsoleSink> {
    store: TaskStore,
    tags: TagRegistry,
    tracking: TrackingSession,
    preferences: Preferences,
    view: ViewMode,
    sink: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: NotificationSink> Workspace<S> {
    pub fn new(preferences: Preferences, sink: S) -> Self {
        Self::restore(WorkspaceSnapshot::default(), preferences, sink)
    }

    pub fn restore(snapshot: WorkspaceSnapshot, preferences: Preferences, sink: S) -> Self {
        Self::restore_with_clock(snapshot, preferences, sink, Utc::now)
    }

    /// Rebuilds a workspace from a snapshot. A running entry left behind while
    /// time tracking is disabled is closed at `clock()`.
    pub fn restore_with_clock(
        snapshot: WorkspaceSnapshot,
        preferences: Preferences,
        sink: S,
        clock: fn() -> DateTime<Utc>,
    ) -> Self {
        let (tasks, tracking) = TrackingSession::resume(
            &snapshot.tasks,
            preferences.enable_time_tracking,
            preferences.default_task_duration,
            clock(),
        );
        Self {
            store: TaskStore::from_tasks(tasks),
            tags: TagRegistry::from_tags(snapshot.tags),
            tracking,
            view: snapshot.view.unwrap_or(preferences.default_view),
            preferences,
            sink,
            clock,
        }
    }

    /// Replaces the wall clock, for tests.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Loads preferences and the saved snapshot. An unreadable snapshot is
    /// reported and replaced by an empty one.
    pub fn load<P: PersistenceProvider + ?Sized>(provider: &P, sink: S) -> Result<Self, StorageError> {
        let preferences = Preferences::load(provider)?;
        let snapshot = match load_json::<WorkspaceSnapshot, P>(provider, WORKSPACE_KEY) {
            Ok(snapshot) => snapshot.unwrap_or_default(),
            Err(StorageError::Json(error)) => {
                warn!(%error, "discarding unreadable workspace snapshot");
                sink.notify(Notification::new(Level::Warning, Message::WorkspaceCorrupted(error.to_string())));
                WorkspaceSnapshot::default()
            }
            Err(error) => return Err(error),
        };
        Ok(Self::restore(snapshot, preferences, sink))
    }

    pub fn save<P: PersistenceProvider + ?Sized>(&self, provider: &mut P) -> Result<(), StorageError> {
        self.preferences.save(provider)?;
        save_json(provider, WORKSPACE_KEY, &self.snapshot())
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        WorkspaceSnapshot {
            tasks: self.store.tasks().to_vec(),
            tags: self.tags.list().to_vec(),
            view: Some(self.view),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Forwards to the sink. Only errors get through while notifications
    /// are switched off.
    fn notify(&self, level: Level, message: Message) {
        if !self.preferences.enable_notifications && level != Level::Error {
            return;
        }
        self.sink.notify(Notification::new(level, message));
    }

    fn title_of(&self, id: &str) -> String {
        self.store.get(id).map(|task| task.title.clone()).unwrap_or_else(|| id.to_string())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.store.get(id)
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn tracked_task(&self) -> Option<&Task> {
        self.tracking.current().and_then(|id| self.store.get(id))
    }

    /// Tasks the list view shows, honouring `show_completed_tasks`.
    pub fn visible_tasks(&self) -> Vec<(usize, &Task)> {
        board::list_view(self.store.tasks(), self.preferences.show_completed_tasks)
    }

    pub fn kanban(&self) -> Vec<(TaskStatus, Vec<&Task>)> {
        board::kanban_columns(self.store.tasks())
    }

    pub fn analytics(&self) -> TaskAnalytics {
        analytics::compute(self.store.tasks(), self.now())
    }

    pub fn create_task(&mut self, draft: TaskDraft) -> Task {
        let now = self.now();
        let task = self.store.create(draft, &self.preferences.task_defaults(), now);
        self.notify(Level::Success, Message::TaskCreated(task.title.clone()));
        task
    }

    pub fn toggle_complete(&mut self, id: &str) -> Option<TaskStatus> {
        let now = self.now();
        let Some(status) = self.store.toggle_complete(id, now) else {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
            return None;
        };
        let title = self.title_of(id);
        if status.is_completed() {
            self.stop_if_tracked(id, now);
            self.notify(Level::Success, Message::TaskCompleted(title));
        } else {
            self.notify(Level::Info, Message::TaskReopened(title, status.to_string()));
        }
        Some(status)
    }

    pub fn set_status(&mut self, id: &str, status: TaskStatus) -> bool {
        let now = self.now();
        if self.store.get(id).is_none() {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
            return false;
        }
        if !self.store.set_status(id, status, now) {
            return false;
        }
        if status.is_completed() {
            self.stop_if_tracked(id, now);
        }
        self.notify(Level::Info, Message::TaskStatusChanged(self.title_of(id), status.to_string()));
        true
    }

    pub fn edit_task(&mut self, id: &str, patch: TaskPatch) -> bool {
        let now = self.now();
        if self.store.get(id).is_none() {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
            return false;
        }
        if !self.store.update_details(id, patch, now) {
            self.notify(Level::Info, Message::NoChangesDetected);
            return false;
        }
        self.notify(Level::Success, Message::TaskUpdated(self.title_of(id)));
        true
    }

    /// Deletes a task. Its running entry, if any, goes with it.
    pub fn delete_task(&mut self, id: &str) -> Option<Task> {
        let Some(task) = self.store.remove(id) else {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
            return None;
        };
        self.tracking.release(id);
        self.notify(Level::Success, Message::TaskDeleted(task.title.clone()));
        Some(task)
    }

    pub fn toggle_tracking(&mut self, id: &str) -> TrackingChange {
        let now = self.now();
        let (tasks, change) = self.tracking.toggle(self.store.tasks(), id, now);
        self.store.replace(tasks);
        if change == TrackingChange::Ignored {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
        }
        self.report_tracking(&change);
        change
    }

    pub fn stop_tracking(&mut self) -> Option<TrackingChange> {
        let now = self.now();
        let (tasks, change) = self.tracking.stop(self.store.tasks(), now);
        self.store.replace(tasks);
        if let Some(change) = &change {
            self.report_tracking(change);
        }
        change
    }

    fn stop_if_tracked(&mut self, id: &str, now: DateTime<Utc>) {
        if self.tracking.current() != Some(id) {
            return;
        }
        let (tasks, change) = self.tracking.stop(self.store.tasks(), now);
        self.store.replace(tasks);
        if let Some(change) = change {
            self.report_tracking(&change);
        }
    }

    fn report_tracking(&self, change: &TrackingChange) {
        match change {
            TrackingChange::Started { task_id } => {
                self.notify(Level::Info, Message::TrackingStarted(self.title_of(task_id)))
            }
            TrackingChange::Stopped { task_id, minutes } => {
                self.notify(Level::Info, Message::TrackingStopped(self.title_of(task_id), *minutes))
            }
            TrackingChange::Switched { from, to } => {
                self.notify(Level::Info, Message::TrackingSwitched(self.title_of(from), self.title_of(to)))
            }
            TrackingChange::Disabled => self.notify(Level::Warning, Message::TrackingDisabled),
            TrackingChange::Ignored => {}
        }
    }

    /// Applies a finished drag in the current view.
    pub fn apply_drop(&mut self, event: &DropEvent) -> DropOutcome {
        let now = self.now();
        let outcome = board::apply_drop(&mut self.store, self.view, event, now);
        match &outcome {
            DropOutcome::Reordered | DropOutcome::ReorderedInBucket(_) => {
                self.notify(Level::Info, Message::TasksReordered)
            }
            DropOutcome::Moved { task_id, to, .. } => {
                if to.is_completed() {
                    self.stop_if_tracked(task_id, now);
                }
                self.notify(Level::Info, Message::TaskMoved(self.title_of(task_id), to.to_string()));
            }
            DropOutcome::Ignored => {}
        }
        outcome
    }

    pub fn create_tag(&mut self, name: &str, color: Option<String>) -> TaskTag {
        let tag = self.tags.create(name, color);
        self.notify(Level::Success, Message::TagCreated(tag.name.clone()));
        tag
    }

    /// Removes the tag definition only; tasks keep the stale id.
    pub fn delete_tag(&mut self, key: &str) -> Option<TaskTag> {
        let Some(id) = self.tags.lookup(key).map(|tag| tag.id.clone()) else {
            self.notify(Level::Error, Message::TagNotFound(key.to_string()));
            return None;
        };
        let tag = self.tags.delete(&id)?;
        self.notify(Level::Success, Message::TagDeleted(tag.name.clone()));
        Some(tag)
    }

    /// Tags a task by tag name, creating the tag on first use.
    pub fn tag_task(&mut self, id: &str, tag_name: &str) -> bool {
        if self.store.get(id).is_none() {
            self.notify(Level::Error, Message::TaskNotFound(id.to_string()));
            return false;
        }
        let now = self.now();
        let tag = self.tags.create(tag_name, None);
        if !self.store.add_tag(id, &tag.id, now) {
            return false;
        }
        self.notify(Level::Success, Message::TagAdded(tag.name, self.title_of(id)));
        true
    }

    pub fn untag_task(&mut self, id: &str, tag_key: &str) -> bool {
        let now = self.now();
        let Some(tag) = self.tags.lookup(tag_key).cloned() else {
            self.notify(Level::Error, Message::TagNotFound(tag_key.to_string()));
            return false;
        };
        if !self.store.remove_tag(id, &tag.id, now) {
            return false;
        }
        self.notify(Level::Success, Message::TagRemoved(tag.name, self.title_of(id)));
        true
    }

    /// Installs new preferences. Turning time tracking off stops the timer.
    pub fn update_preferences(&mut self, preferences: Preferences) {
        if !preferences.enable_time_tracking {
            self.stop_tracking();
        }
        self.tracking
            .configure(preferences.enable_time_tracking, preferences.default_task_duration);
        self.preferences = preferences;
        self.notify(Level::Success, Message::PreferencesSaved);
    }

    /// Tasks with a due date, in calendar form.
    pub fn calendar_tasks(&self) -> Vec<CalendarTask> {
        self.store.tasks().iter().filter_map(CalendarTask::from_task).collect()
    }

    /// Like [`calendar_tasks`](Self::calendar_tasks), without completed tasks.
    pub fn open_calendar_tasks(&self) -> Vec<CalendarTask> {
        self.store
            .tasks()
            .iter()
            .filter(|task| !task.completed)
            .filter_map(CalendarTask::from_task)
            .collect()
    }

    /// Raises a notification on behalf of a caller (sync, pomodoro).
    pub fn announce(&self, level: Level, message: Message) {
        self.notify(level, message);
    }
}
