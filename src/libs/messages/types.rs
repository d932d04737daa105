/// Every user-facing message in the application.
///
/// Variants carry only the data needed to render them; the wording lives in
/// [`display`](super::display) so it can be changed in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String, String), // title, restored status
    TaskStatusChanged(String, String),
    TaskMoved(String, String), // title, destination bucket
    TaskNotFound(String),
    TasksReordered,
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    NoChangesDetected,
    DropIgnored,

    // === TRACKING MESSAGES ===
    TrackingStarted(String),
    TrackingStopped(String, u64), // title, minutes recorded
    TrackingSwitched(String, String),
    TrackingDisabled,
    TrackingIdle,
    TrackingCurrent(String, String), // title, elapsed

    // === TAG MESSAGES ===
    TagCreated(String),
    TagDeleted(String),
    TagAdded(String, String), // tag, task
    TagRemoved(String, String),
    TagNotFound(String),
    TagsHeader,
    NoTagsFound,

    // === ANALYTICS ===
    AnalyticsHeader,
    KanbanColumnHeader(String, usize),

    // === PREFERENCES & CONFIG ===
    PreferencesSaved,
    PreferencesReset,
    PreferencesHeader,
    UnknownPreference(String),
    InvalidPreferenceValue(String, String),
    ConfigSaved,
    ConfigModuleCalendar,
    ConfigModulePreferences,
    ConfigModuleFocusMode,
    SelectModulesToConfigure,

    // === PROMPTS ===
    PromptTheme,
    PromptDefaultView,
    PromptDefaultTaskDuration,
    PromptDefaultPriority,
    PromptShowCompleted,
    PromptEnableNotifications,
    PromptEnableTimeTracking,
    PromptFocusModeEnabled,
    PromptPomodoroDuration,
    PromptBreakDuration,
    PromptCalendarApiUrl,
    PromptCalendarId,
    PromptCalendarAccessToken,
    PromptCalendarTimeZone,
    PromptCalendarMock,

    // === VALIDATION ===
    InvalidDate(String),
    InvalidStatus(String),
    InvalidPriority(String),
    InvalidViewMode(String),
    InvalidDropLocation(String),

    // === CALENDAR SYNC ===
    CalendarNotConfigured,
    CalendarSyncStarted(usize),
    CalendarSyncFinished(usize, usize), // synced, failed
    CalendarSyncTaskFailed(String, String),
    CalendarNothingToSync,

    // === POMODORO ===
    PomodoroStarted(u32),
    PomodoroPaused,
    PomodoroFinished,
    BreakStarted(u32),
    BreakFinished,
    PomodoroRemaining(String),

    // === STORAGE ===
    DbOpenFailed(String),
    MigrationRunning(u32, String),
    MigrationCompleted(u32),
    WorkspaceCorrupted(String),
}
