#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use std::time::{Duration, Instant};
    use taskminder::api::calendar::{sync_tasks, CalendarConfig, CalendarTask, GoogleCalendar, MockCalendar, SyncError};
    use taskminder::api::calendar::{CalendarClient, CalendarEvent};

    fn task(title: &str, hour: u32) -> CalendarTask {
        CalendarTask {
            title: title.to_string(),
            description: String::new(),
            due_date: Utc.with_ymd_and_hms(2025, 6, 2, hour, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_partial_failure_is_reported_per_task() {
        let calendar = MockCalendar::new().failing_on("Broken");
        let tasks = vec![task("Standup", 9), task("Broken", 10), task("Review", 11)];

        let report = sync_tasks(&calendar, &tasks, "UTC").await;

        assert_eq!(report.synced, 2);
        assert_eq!(report.failed, 1);
        let titles: Vec<_> = report.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Standup", "Broken", "Review"]);

        assert!(report.results[0].success);
        assert_eq!(report.results[0].event_id.as_deref(), Some("mock-event-1"));
        assert!(!report.results[1].success);
        assert!(report.results[1].event_id.is_none());
        assert!(report.results[1].error.as_deref().unwrap().contains("Broken"));
        assert_eq!(report.results[2].event_id.as_deref(), Some("mock-event-2"));
        assert_eq!(calendar.created(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let report = sync_tasks(&MockCalendar::new(), &[], "UTC").await;
        assert_eq!(report.synced, 0);
        assert_eq!(report.failed, 0);
        assert!(report.results.is_empty());
    }

    #[tokio::test]
    async fn test_delay_is_awaited_per_event() {
        let calendar = MockCalendar::new().with_delay(Duration::from_millis(20));
        let started = Instant::now();
        let report = sync_tasks(&calendar, &[task("A", 9), task("B", 10)], "UTC").await;
        assert_eq!(report.synced, 2);
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_google_without_token_is_not_connected() {
        let calendar = GoogleCalendar::new(&CalendarConfig::default());
        let event = CalendarEvent::from_task(&task("A", 9), "UTC");
        assert!(matches!(calendar.insert_event(&event).await, Err(SyncError::NotConnected)));

        let report = sync_tasks(&calendar, &[task("A", 9)], "UTC").await;
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_event_json_shape() {
        let event = CalendarEvent::from_task(&task("Dentist", 14), "Europe/Berlin");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["summary"], "Dentist");
        assert_eq!(json["start"]["dateTime"], "2025-06-02T14:00:00Z");
        assert_eq!(json["end"]["timeZone"], "Europe/Berlin");
        assert!(json.get("id").is_none());
    }
}
