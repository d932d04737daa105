#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use taskminder::libs::analytics::compute;
    use taskminder::libs::task::{Task, TaskPriority, TaskStatus, TimeTracking};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap()
    }

    fn task(id: &str, status: TaskStatus, priority: TaskPriority, due: Option<DateTime<Utc>>) -> Task {
        Task {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            due_date: due,
            priority,
            completed: status == TaskStatus::Completed,
            status,
            tags: vec![],
            time_tracking: None,
            recurrence: None,
            previous_status: None,
            created_at: now(),
            updated_at: now(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute(&[], now());
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.priority_distribution.total(), 0);
        assert_eq!(stats.completion_rate(), 0.0);
    }

    #[test]
    fn test_overdue_task_leaves_overdue_count_once_completed() {
        let yesterday = now() - Duration::days(1);
        let mut tasks = vec![task("report", TaskStatus::Pending, TaskPriority::High, Some(yesterday))];

        let stats = compute(&tasks, now());
        assert_eq!(stats.overdue_tasks, 1);
        assert_eq!(stats.completed_tasks, 0);

        tasks[0].set_status(TaskStatus::Completed, now());
        let stats = compute(&tasks, now());
        assert_eq!(stats.overdue_tasks, 0);
        assert_eq!(stats.completed_tasks, 1);
    }

    #[test]
    fn test_counters() {
        let past = now() - Duration::hours(3);
        let future = now() + Duration::days(2);
        let tasks = vec![
            task("a", TaskStatus::Pending, TaskPriority::High, Some(past)),
            task("b", TaskStatus::InProgress, TaskPriority::Medium, Some(future)),
            task("c", TaskStatus::Completed, TaskPriority::Low, Some(future)),
            task("d", TaskStatus::Completed, TaskPriority::High, Some(past)),
            task("e", TaskStatus::Overdue, TaskPriority::Medium, None),
        ];

        let stats = compute(&tasks, now());
        assert_eq!(stats.total_tasks, 5);
        assert_eq!(stats.completed_tasks, 2);
        assert_eq!(stats.in_progress_tasks, 1);
        assert_eq!(stats.overdue_tasks, 1);
        assert_eq!(stats.upcoming_tasks, 1);
        assert_eq!(stats.priority_distribution.high, 2);
        assert_eq!(stats.priority_distribution.medium, 2);
        assert_eq!(stats.priority_distribution.low, 1);
        assert_eq!(stats.priority_distribution.total(), stats.total_tasks);
        assert!(stats.completed_tasks <= stats.total_tasks);
        assert_eq!(stats.completion_rate(), 40.0);
    }

    #[test]
    fn test_priority_chart_order() {
        let tasks = vec![
            task("a", TaskStatus::Pending, TaskPriority::Low, None),
            task("b", TaskStatus::Pending, TaskPriority::High, None),
        ];
        let chart = compute(&tasks, now()).priority_chart();
        assert_eq!(chart, vec![("High", 1), ("Medium", 0), ("Low", 1)]);
    }

    #[test]
    fn test_time_totals() {
        let mut a = task("a", TaskStatus::Pending, TaskPriority::Medium, None);
        a.time_tracking = Some(TimeTracking {
            estimated_time: 60,
            actual_time: 45,
            entries: vec![],
        });
        let mut b = task("b", TaskStatus::Pending, TaskPriority::Medium, None);
        b.time_tracking = Some(TimeTracking::new(30));
        let c = task("c", TaskStatus::Pending, TaskPriority::Medium, None);

        let stats = compute(&[a, b, c], now());
        assert_eq!(stats.tracked_minutes, 45);
        assert_eq!(stats.estimated_minutes, 90);
    }

    #[test]
    fn test_due_exactly_now_is_neither_overdue_nor_upcoming() {
        let tasks = vec![task("a", TaskStatus::Pending, TaskPriority::Medium, Some(now()))];
        let stats = compute(&tasks, now());
        assert_eq!(stats.overdue_tasks, 0);
        assert_eq!(stats.upcoming_tasks, 0);
    }
}
