use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_print;
use anyhow::Result;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tracing::{debug, warn};

/// Length of every generated event.
pub const EVENT_DURATION_MINUTES: i64 = 30;
const EVENTS_URL: &str = "calendars/{calendar_id}/events";
const DEFAULT_API_URL: &str = "https://www.googleapis.com/calendar/v3";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("calendar request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("calendar rejected the event with HTTP {0}")]
    Status(u16),
    #[error("calendar is not connected")]
    NotConnected,
    #[error("calendar refused '{0}'")]
    Rejected(String),
}

/// What the calendar needs to know about a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarTask {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Utc>,
}

impl CalendarTask {
    /// `None` for tasks without a due date.
    pub fn from_task(task: &Task) -> Option<Self> {
        task.due_date.map(|due_date| Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub summary: String,
    #[serde(default)]
    pub description: String,
    pub start: EventTime,
    pub end: EventTime,
}

impl CalendarEvent {
    /// A fixed-length event starting at the task's due date.
    pub fn from_task(task: &CalendarTask, time_zone: &str) -> Self {
        let end = task.due_date + Duration::minutes(EVENT_DURATION_MINUTES);
        let at = |instant: DateTime<Utc>| EventTime {
            date_time: instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            time_zone: time_zone.to_string(),
        };
        Self {
            id: None,
            summary: task.title.clone(),
            description: task.description.clone(),
            start: at(task.due_date),
            end: at(end),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait CalendarClient {
    /// Creates the event and returns its id.
    async fn insert_event(&self, event: &CalendarEvent) -> Result<String, SyncError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSyncResult {
    pub title: String,
    pub success: bool,
    pub event_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub synced: usize,
    pub failed: usize,
    pub results: Vec<TaskSyncResult>,
}

/// Submits one event per task. A failure is recorded and the batch moves on;
/// nothing is retried.
pub async fn sync_tasks<C: CalendarClient>(client: &C, tasks: &[CalendarTask], time_zone: &str) -> SyncReport {
    let mut report = SyncReport::default();
    for task in tasks {
        let event = CalendarEvent::from_task(task, time_zone);
        let result = match client.insert_event(&event).await {
            Ok(event_id) => {
                debug!(title = %task.title, event_id = %event_id, "event created");
                report.synced += 1;
                TaskSyncResult {
                    title: task.title.clone(),
                    success: true,
                    event_id: Some(event_id),
                    error: None,
                }
            }
            Err(error) => {
                warn!(title = %task.title, %error, "event not created");
                report.failed += 1;
                TaskSyncResult {
                    title: task.title.clone(),
                    success: false,
                    event_id: None,
                    error: Some(error.to_string()),
                }
            }
        };
        report.results.push(result);
    }
    report
}

#[derive(Debug)]
pub struct GoogleCalendar {
    client: Client,
    config: CalendarConfig,
}

impl GoogleCalendar {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn events_url(&self) -> String {
        let path = EVENTS_URL.replace("{calendar_id}", &self.config.calendar_id);
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }
}

impl CalendarClient for GoogleCalendar {
    async fn insert_event(&self, event: &CalendarEvent) -> Result<String, SyncError> {
        if self.config.access_token.is_empty() {
            return Err(SyncError::NotConnected);
        }
        let res = self
            .client
            .post(self.events_url())
            .bearer_auth(&self.config.access_token)
            .json(event)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(SyncError::Status(res.status().as_u16()));
        }
        let created = res.json::<CalendarEvent>().await?;
        created.id.ok_or_else(|| SyncError::Rejected(event.summary.clone()))
    }
}

/// Offline calendar that hands out sequential ids.
#[derive(Debug, Default)]
pub struct MockCalendar {
    failing: HashSet<String>,
    delay: Option<std::time::Duration>,
    next_id: AtomicU64,
}

impl MockCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events with this summary are refused.
    pub fn failing_on(mut self, title: impl Into<String>) -> Self {
        self.failing.insert(title.into());
        self
    }

    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn created(&self) -> u64 {
        self.next_id.load(Ordering::Relaxed)
    }
}

impl CalendarClient for MockCalendar {
    async fn insert_event(&self, event: &CalendarEvent) -> Result<String, SyncError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&event.summary) {
            return Err(SyncError::Rejected(event.summary.clone()));
        }
        let n = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(format!("mock-event-{}", n))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    pub api_url: String,
    pub calendar_id: String,
    pub access_token: String,
    pub time_zone: String,
    /// Use [`MockCalendar`] instead of the network.
    #[serde(default)]
    pub mock: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            calendar_id: "primary".to_string(),
            access_token: String::new(),
            time_zone: "UTC".to_string(),
            mock: false,
        }
    }
}

impl CalendarConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "calendar".to_string(),
            name: Message::ConfigModuleCalendar.to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleCalendar);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCalendarApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            calendar_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCalendarId.to_string())
                .default(config.calendar_id)
                .interact_text()?,
            access_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCalendarAccessToken.to_string())
                .default(config.access_token)
                .allow_empty(true)
                .interact_text()?,
            time_zone: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCalendarTimeZone.to_string())
                .default(config.time_zone)
                .interact_text()?,
            mock: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCalendarMock.to_string())
                .default(config.mock)
                .interact()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn event_spans_thirty_minutes_from_due_date() {
        let task = CalendarTask {
            title: "Dentist".into(),
            description: "Bring card".into(),
            due_date: Utc.with_ymd_and_hms(2025, 6, 2, 14, 0, 0).unwrap(),
        };
        let event = CalendarEvent::from_task(&task, "Europe/Berlin");
        assert_eq!(event.summary, "Dentist");
        assert_eq!(event.start.date_time, "2025-06-02T14:00:00Z");
        assert_eq!(event.end.date_time, "2025-06-02T14:30:00Z");
        assert_eq!(event.end.time_zone, "Europe/Berlin");
    }

    #[test]
    fn events_url_uses_calendar_id() {
        let calendar = GoogleCalendar::new(&CalendarConfig {
            api_url: "https://example.test/v3/".into(),
            calendar_id: "team".into(),
            ..CalendarConfig::default()
        });
        assert_eq!(calendar.events_url(), "https://example.test/v3/calendars/team/events");
    }
}
