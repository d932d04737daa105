//! Wording for [`Message`].
//!
//! Keeping all text here means the rest of the code only ever names a
//! variant, and wording changes never touch business logic.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created.", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated.", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted.", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed.", title),
            Message::TaskReopened(title, status) => format!("Task '{}' reopened as {}.", title, status),
            Message::TaskStatusChanged(title, status) => format!("Task '{}' is now {}.", title, status),
            Message::TaskMoved(title, status) => format!("Task '{}' moved to {}.", title, status),
            Message::TaskNotFound(id) => format!("Task '{}' not found.", id),
            Message::TasksReordered => "Tasks reordered.".to_string(),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::DropIgnored => "Nothing to move: drop had no valid destination.".to_string(),

            // === TRACKING MESSAGES ===
            Message::TrackingStarted(title) => format!("Started tracking '{}'.", title),
            Message::TrackingStopped(title, minutes) => format!("Stopped tracking '{}' ({} min recorded).", title, minutes),
            Message::TrackingSwitched(from, to) => format!("Switched tracking from '{}' to '{}'.", from, to),
            Message::TrackingDisabled => "Time tracking is disabled in preferences.".to_string(),
            Message::TrackingIdle => "No task is being tracked.".to_string(),
            Message::TrackingCurrent(title, elapsed) => format!("Tracking '{}' ({} so far).", title, elapsed),

            // === TAG MESSAGES ===
            Message::TagCreated(name) => format!("Tag '{}' created.", name),
            Message::TagDeleted(name) => format!("Tag '{}' deleted.", name),
            Message::TagAdded(tag, task) => format!("Tag '{}' added to '{}'.", tag, task),
            Message::TagRemoved(tag, task) => format!("Tag '{}' removed from '{}'.", tag, task),
            Message::TagNotFound(name) => format!("Tag '{}' not found.", name),
            Message::TagsHeader => "Tags:".to_string(),
            Message::NoTagsFound => "No tags found.".to_string(),

            // === ANALYTICS ===
            Message::AnalyticsHeader => "Task analytics:".to_string(),
            Message::KanbanColumnHeader(status, count) => format!("{} ({})", status, count),

            // === PREFERENCES & CONFIG ===
            Message::PreferencesSaved => "Preferences saved.".to_string(),
            Message::PreferencesReset => "Preferences reset to defaults.".to_string(),
            Message::PreferencesHeader => "Preferences:".to_string(),
            Message::UnknownPreference(key) => format!("Unknown preference '{}'.", key),
            Message::InvalidPreferenceValue(key, value) => format!("Invalid value '{}' for preference '{}'.", value, key),
            Message::ConfigSaved => "Configuration saved.".to_string(),
            Message::ConfigModuleCalendar => "Calendar sync".to_string(),
            Message::ConfigModulePreferences => "Preferences".to_string(),
            Message::ConfigModuleFocusMode => "Focus mode".to_string(),
            Message::SelectModulesToConfigure => "Select modules to configure".to_string(),

            // === PROMPTS ===
            Message::PromptTheme => "Theme (light/dark/system)".to_string(),
            Message::PromptDefaultView => "Default view (list/kanban/calendar)".to_string(),
            Message::PromptDefaultTaskDuration => "Default task estimate, minutes".to_string(),
            Message::PromptDefaultPriority => "Default priority (low/medium/high)".to_string(),
            Message::PromptShowCompleted => "Show completed tasks in lists?".to_string(),
            Message::PromptEnableNotifications => "Enable notifications?".to_string(),
            Message::PromptEnableTimeTracking => "Enable time tracking?".to_string(),
            Message::PromptFocusModeEnabled => "Enable focus mode?".to_string(),
            Message::PromptPomodoroDuration => "Pomodoro length, minutes".to_string(),
            Message::PromptBreakDuration => "Break length, minutes".to_string(),
            Message::PromptCalendarApiUrl => "Calendar API URL".to_string(),
            Message::PromptCalendarId => "Calendar ID".to_string(),
            Message::PromptCalendarAccessToken => "Calendar access token".to_string(),
            Message::PromptCalendarTimeZone => "Event time zone".to_string(),
            Message::PromptCalendarMock => "Use the offline mock calendar?".to_string(),

            // === VALIDATION ===
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM.", value),
            Message::InvalidStatus(value) => format!("Invalid status '{}'. Use pending, in-progress, completed or overdue.", value),
            Message::InvalidPriority(value) => format!("Invalid priority '{}'. Use low, medium or high.", value),
            Message::InvalidViewMode(value) => format!("Invalid view '{}'. Use list, kanban or calendar.", value),
            Message::InvalidDropLocation(value) => format!("Invalid drop location '{}'. Use INDEX or BUCKET:INDEX.", value),

            // === CALENDAR SYNC ===
            Message::CalendarNotConfigured => "Calendar is not configured. Run `taskminder init` first.".to_string(),
            Message::CalendarSyncStarted(count) => format!("Syncing {} task(s) to the calendar...", count),
            Message::CalendarSyncFinished(synced, failed) => format!("Calendar sync finished: {} synced, {} failed.", synced, failed),
            Message::CalendarSyncTaskFailed(title, error) => format!("Failed to sync '{}': {}", title, error),
            Message::CalendarNothingToSync => "No tasks with a due date to sync.".to_string(),

            // === POMODORO ===
            Message::PomodoroStarted(minutes) => format!("Pomodoro started: {} minutes of focus.", minutes),
            Message::PomodoroPaused => "Pomodoro paused.".to_string(),
            Message::PomodoroFinished => "Pomodoro finished. Time for a break!".to_string(),
            Message::BreakStarted(minutes) => format!("Break time: {} minutes.", minutes),
            Message::BreakFinished => "Break finished. Ready to focus again?".to_string(),
            Message::PomodoroRemaining(left) => format!("{} remaining", left),

            // === STORAGE ===
            Message::DbOpenFailed(error) => format!("Failed to open database: {}", error),
            Message::MigrationRunning(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::WorkspaceCorrupted(error) => format!("Saved workspace could not be read, starting empty: {}", error),
        };
        write!(f, "{}", text)
    }
}
