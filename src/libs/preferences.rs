//! User preferences, persisted under [`PREFERENCES_KEY`].
//!
//! Stored as camelCase JSON. Any field missing from a stored value falls back
//! to its default, so older saves keep loading after new settings appear.

use crate::libs::board::ViewMode;
use crate::libs::messages::Message;
use crate::libs::persistence::{load_json, save_json, PersistenceProvider, StorageError};
use crate::libs::store::TaskDefaults;
use crate::libs::task::TaskPriority;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const PREFERENCES_KEY: &str = "taskminder-preferences";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("unknown preference '{0}'")]
    Unknown(String),
    #[error("invalid value '{value}' for '{key}'")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
    System,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            _ => Err(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GoogleIntegration {
    pub is_connected: bool,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Integrations {
    pub google_calendar: bool,
    pub slack: bool,
    pub microsoft_teams: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FocusMode {
    pub enabled: bool,
    pub hide_notifications: bool,
    pub hide_navigation: bool,
    /// Minutes.
    pub pomodoro_duration: u32,
    /// Minutes.
    pub break_duration: u32,
}

impl Default for FocusMode {
    fn default() -> Self {
        Self {
            enabled: false,
            hide_notifications: true,
            hide_navigation: false,
            pomodoro_duration: 25,
            break_duration: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub default_view: ViewMode,
    /// Minutes, seeds `estimated_time` of new tasks.
    pub default_task_duration: u32,
    pub default_priority: TaskPriority,
    pub show_completed_tasks: bool,
    pub enable_notifications: bool,
    pub notification_channels: Vec<String>,
    pub enable_time_tracking: bool,
    pub enable_collaboration: bool,
    pub enable_smart_suggestions: bool,
    pub enable_natural_language_input: bool,
    pub background_theme: String,
    pub google_integration: GoogleIntegration,
    pub integrations: Integrations,
    pub focus_mode: FocusMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            default_view: ViewMode::List,
            default_task_duration: 30,
            default_priority: TaskPriority::Medium,
            show_completed_tasks: true,
            enable_notifications: true,
            notification_channels: vec!["in-app".to_string()],
            enable_time_tracking: true,
            enable_collaboration: false,
            enable_smart_suggestions: true,
            enable_natural_language_input: true,
            background_theme: "rainbow".to_string(),
            google_integration: GoogleIntegration::default(),
            integrations: Integrations::default(),
            focus_mode: FocusMode::default(),
        }
    }
}

impl Preferences {
    pub fn load<P: PersistenceProvider + ?Sized>(provider: &P) -> Result<Self, StorageError> {
        Ok(load_json(provider, PREFERENCES_KEY)?.unwrap_or_default())
    }

    pub fn save<P: PersistenceProvider + ?Sized>(&self, provider: &mut P) -> Result<(), StorageError> {
        save_json(provider, PREFERENCES_KEY, self)
    }

    pub fn task_defaults(&self) -> TaskDefaults {
        TaskDefaults {
            time_tracking: self.enable_time_tracking,
            estimated_time: self.default_task_duration,
            priority: self.default_priority,
        }
    }

    /// Key/value pairs in display order, keys as accepted by [`set`](Self::set).
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("theme", self.theme.to_string()),
            ("default_view", self.default_view.to_string()),
            ("default_task_duration", self.default_task_duration.to_string()),
            ("default_priority", self.default_priority.to_string()),
            ("show_completed_tasks", self.show_completed_tasks.to_string()),
            ("enable_notifications", self.enable_notifications.to_string()),
            ("notification_channels", self.notification_channels.join(",")),
            ("enable_time_tracking", self.enable_time_tracking.to_string()),
            ("enable_collaboration", self.enable_collaboration.to_string()),
            ("enable_smart_suggestions", self.enable_smart_suggestions.to_string()),
            ("enable_natural_language_input", self.enable_natural_language_input.to_string()),
            ("background_theme", self.background_theme.clone()),
            ("focus_mode.enabled", self.focus_mode.enabled.to_string()),
            ("focus_mode.hide_notifications", self.focus_mode.hide_notifications.to_string()),
            ("focus_mode.hide_navigation", self.focus_mode.hide_navigation.to_string()),
            ("focus_mode.pomodoro_duration", self.focus_mode.pomodoro_duration.to_string()),
            ("focus_mode.break_duration", self.focus_mode.break_duration.to_string()),
            ("integrations.google_calendar", self.integrations.google_calendar.to_string()),
            ("integrations.slack", self.integrations.slack.to_string()),
            ("integrations.microsoft_teams", self.integrations.microsoft_teams.to_string()),
        ]
    }

    /// Sets one preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let invalid = || PreferenceError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let flag = || value.trim().parse::<bool>().map_err(|_| invalid());
        let minutes = || match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(invalid()),
        };

        match key {
            "theme" => self.theme = value.parse().map_err(|_| invalid())?,
            "default_view" => self.default_view = value.parse().map_err(|_| invalid())?,
            "default_task_duration" => self.default_task_duration = minutes()?,
            "default_priority" => self.default_priority = value.parse().map_err(|_| invalid())?,
            "show_completed_tasks" => self.show_completed_tasks = flag()?,
            "enable_notifications" => self.enable_notifications = flag()?,
            "notification_channels" => {
                self.notification_channels = value
                    .split(',')
                    .map(str::trim)
                    .filter(|channel| !channel.is_empty())
                    .map(String::from)
                    .collect()
            }
            "enable_time_tracking" => self.enable_time_tracking = flag()?,
            "enable_collaboration" => self.enable_collaboration = flag()?,
            "enable_smart_suggestions" => self.enable_smart_suggestions = flag()?,
            "enable_natural_language_input" => self.enable_natural_language_input = flag()?,
            "background_theme" => self.background_theme = value.trim().to_string(),
            "focus_mode.enabled" => self.focus_mode.enabled = flag()?,
            "focus_mode.hide_notifications" => self.focus_mode.hide_notifications = flag()?,
            "focus_mode.hide_navigation" => self.focus_mode.hide_navigation = flag()?,
            "focus_mode.pomodoro_duration" => self.focus_mode.pomodoro_duration = minutes()?,
            "focus_mode.break_duration" => self.focus_mode.break_duration = minutes()?,
            "integrations.google_calendar" => self.integrations.google_calendar = flag()?,
            "integrations.slack" => self.integrations.slack = flag()?,
            "integrations.microsoft_teams" => self.integrations.microsoft_teams = flag()?,
            _ => return Err(PreferenceError::Unknown(key.to_string())),
        }
        Ok(())
    }

    /// Interactive setup of the general preferences.
    pub fn init_general(&self) -> Result<Self> {
        msg_print!(Message::ConfigModulePreferences);
        let theme = ColorfulTheme::default();
        let mut prefs = self.clone();

        prefs.theme = Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptTheme.to_string())
            .default(self.theme.to_string())
            .validate_with(|input: &String| input.parse::<Theme>().map(|_| ()))
            .interact_text()?
            .parse()
            .unwrap_or(self.theme);
        prefs.default_view = Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptDefaultView.to_string())
            .default(self.default_view.to_string())
            .validate_with(|input: &String| input.parse::<ViewMode>().map(|_| ()))
            .interact_text()?
            .parse()
            .unwrap_or(self.default_view);
        prefs.default_task_duration = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultTaskDuration.to_string())
            .default(self.default_task_duration)
            .interact_text()?;
        prefs.default_priority = Input::<String>::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .default(self.default_priority.to_string())
            .validate_with(|input: &String| input.parse::<TaskPriority>().map(|_| ()).map_err(|e| e.to_string()))
            .interact_text()?
            .parse()
            .unwrap_or(self.default_priority);
        prefs.show_completed_tasks = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptShowCompleted.to_string())
            .default(self.show_completed_tasks)
            .interact()?;
        prefs.enable_notifications = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptEnableNotifications.to_string())
            .default(self.enable_notifications)
            .interact()?;
        prefs.enable_time_tracking = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptEnableTimeTracking.to_string())
            .default(self.enable_time_tracking)
            .interact()?;

        Ok(prefs)
    }

    pub fn init_focus_mode(&self) -> Result<Self> {
        msg_print!(Message::ConfigModuleFocusMode);
        let theme = ColorfulTheme::default();
        let mut prefs = self.clone();

        prefs.focus_mode.enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptFocusModeEnabled.to_string())
            .default(self.focus_mode.enabled)
            .interact()?;
        prefs.focus_mode.pomodoro_duration = Input::with_theme(&theme)
            .with_prompt(Message::PromptPomodoroDuration.to_string())
            .default(self.focus_mode.pomodoro_duration)
            .interact_text()?;
        prefs.focus_mode.break_duration = Input::with_theme(&theme)
            .with_prompt(Message::PromptBreakDuration.to_string())
            .default(self.focus_mode.break_duration)
            .interact_text()?;

        Ok(prefs)
    }
}
