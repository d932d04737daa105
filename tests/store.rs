#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use taskminder::libs::store::{TaskDefaults, TaskStore};
    use taskminder::libs::task::{RecurrenceFrequency, TaskDraft, TaskPatch, TaskPriority, TaskStatus};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 10, 8, 30, 0).unwrap()
    }

    /// Store with one task per title, all pending.
    fn store_with(titles: &[&str]) -> (TaskStore, Vec<String>) {
        let mut store = TaskStore::new();
        let ids = titles
            .iter()
            .map(|title| store.create(TaskDraft::new(*title), &TaskDefaults::default(), now()).id)
            .collect();
        (store, ids)
    }

    fn titles(store: &TaskStore) -> Vec<String> {
        store.tasks().iter().map(|task| task.title.clone()).collect()
    }

    fn consistent(store: &TaskStore) -> bool {
        store.tasks().iter().all(|task| task.completed == (task.status == TaskStatus::Completed))
    }

    #[test]
    fn test_create_defaults() {
        let (store, ids) = store_with(&["Write tests"]);
        let task = store.get(&ids[0]).unwrap();
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.completed);
        assert_eq!(task.priority, TaskPriority::Medium);
        assert_eq!(task.created_at, now());
        assert_eq!(task.updated_at, now());
        assert_eq!(task.time_tracking.as_ref().unwrap().estimated_time, 30);
    }

    #[test]
    fn test_toggle_complete_restores_previous_status() {
        let (mut store, ids) = store_with(&["Review"]);
        store.set_status(&ids[0], TaskStatus::InProgress, now());

        assert_eq!(store.toggle_complete(&ids[0], now()), Some(TaskStatus::Completed));
        assert!(store.get(&ids[0]).unwrap().completed);

        assert_eq!(store.toggle_complete(&ids[0], now()), Some(TaskStatus::InProgress));
        let task = store.get(&ids[0]).unwrap();
        assert!(!task.completed);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert!(consistent(&store));
    }

    #[test]
    fn test_toggle_complete_on_created_task_goes_back_to_pending() {
        let (mut store, ids) = store_with(&["Email"]);
        store.toggle_complete(&ids[0], now());
        assert_eq!(store.toggle_complete(&ids[0], now()), Some(TaskStatus::Pending));
    }

    #[test]
    fn test_toggle_complete_unknown_id() {
        let (mut store, _) = store_with(&["Only"]);
        let before = store.clone();
        assert_eq!(store.toggle_complete("nope", now()), None);
        assert_eq!(store, before);
    }

    #[test]
    fn test_set_status_refreshes_updated_at() {
        let (mut store, ids) = store_with(&["Deploy"]);
        let later = now() + Duration::hours(2);
        assert!(store.set_status(&ids[0], TaskStatus::Overdue, later));
        assert_eq!(store.get(&ids[0]).unwrap().updated_at, later);
        assert!(!store.set_status(&ids[0], TaskStatus::Overdue, later + Duration::hours(1)));
        assert_eq!(store.get(&ids[0]).unwrap().updated_at, later);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let (mut store, _) = store_with(&["A", "B", "C", "D"]);
        assert!(store.reorder(0, 2));
        assert_eq!(titles(&store), ["B", "C", "A", "D"]);
        assert!(store.reorder(3, 0));
        assert_eq!(titles(&store), ["D", "B", "C", "A"]);

        let mut sorted = titles(&store);
        sorted.sort();
        assert_eq!(sorted, ["A", "B", "C", "D"]);
        assert!(store.tasks().iter().all(|task| task.updated_at == now()));
    }

    #[test]
    fn test_reorder_out_of_range_is_noop() {
        let (mut store, _) = store_with(&["A", "B"]);
        assert!(!store.reorder(0, 2));
        assert!(!store.reorder(5, 0));
        assert_eq!(titles(&store), ["A", "B"]);
    }

    #[test]
    fn test_reorder_within_bucket_leaves_other_buckets_alone() {
        let (mut store, ids) = store_with(&["A", "X", "B", "C"]);
        store.set_status(&ids[1], TaskStatus::InProgress, now());

        assert!(store.reorder_within_bucket(TaskStatus::Pending, 0, 2));
        assert_eq!(titles(&store), ["B", "X", "C", "A"]);
        assert_eq!(store.tasks()[1].id, ids[1]);
        assert!(!store.reorder_within_bucket(TaskStatus::InProgress, 0, 1));
        assert!(!store.reorder_within_bucket(TaskStatus::Overdue, 0, 0));
        assert!(store.tasks().iter().all(|task| task.updated_at == now()));
    }

    #[test]
    fn test_move_between_buckets_places_task_at_index() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.set_status(&ids[2], TaskStatus::InProgress, now());

        assert!(store.move_between_buckets(&ids[0], TaskStatus::InProgress, Some(0), now()));
        assert_eq!(titles(&store), ["B", "A", "C"]);

        let in_progress: Vec<_> = store.bucket(TaskStatus::InProgress).iter().map(|t| t.title.clone()).collect();
        assert_eq!(in_progress, ["A", "C"]);
        let a = store.get(&ids[0]).unwrap();
        assert_eq!(a.status, TaskStatus::InProgress);
        assert!(!a.completed);
    }

    #[test]
    fn test_move_between_buckets_is_idempotent() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.set_status(&ids[2], TaskStatus::Completed, now());

        store.move_between_buckets(&ids[0], TaskStatus::Completed, Some(0), now());
        let once = store.clone();
        store.move_between_buckets(&ids[0], TaskStatus::Completed, Some(0), now());
        assert_eq!(store, once);
        assert!(store.get(&ids[0]).unwrap().completed);
        assert!(consistent(&store));
    }

    #[test]
    fn test_move_without_index_appends_to_bucket() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.set_status(&ids[1], TaskStatus::InProgress, now());

        store.move_between_buckets(&ids[1], TaskStatus::Pending, None, now());
        assert_eq!(titles(&store), ["A", "C", "B"]);

        store.move_between_buckets(&ids[0], TaskStatus::Pending, Some(99), now());
        assert_eq!(titles(&store), ["C", "B", "A"]);
    }

    #[test]
    fn test_move_into_empty_bucket_keeps_position() {
        let (mut store, ids) = store_with(&["A", "B", "C"]);
        store.move_between_buckets(&ids[1], TaskStatus::Overdue, Some(0), now());
        assert_eq!(titles(&store), ["A", "B", "C"]);
        assert_eq!(store.get(&ids[1]).unwrap().status, TaskStatus::Overdue);
    }

    #[test]
    fn test_remove() {
        let (mut store, ids) = store_with(&["A", "B"]);
        assert_eq!(store.remove(&ids[0]).map(|t| t.title), Some("A".to_string()));
        assert!(store.remove(&ids[0]).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_details() {
        let (mut store, ids) = store_with(&["Draft"]);
        let due = now() + Duration::days(3);
        let later = now() + Duration::minutes(1);
        let patch = TaskPatch {
            title: Some("Final".into()),
            due_date: Some(due),
            priority: Some(TaskPriority::High),
            recurrence: Some("weekly".parse().unwrap()),
            estimated_time: Some(120),
            ..TaskPatch::default()
        };
        assert!(store.update_details(&ids[0], patch, later));

        let task = store.get(&ids[0]).unwrap();
        assert_eq!(task.title, "Final");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.recurrence.unwrap().frequency, RecurrenceFrequency::Weekly);
        assert_eq!(task.time_tracking.as_ref().unwrap().estimated_time, 120);
        assert_eq!(task.updated_at, later);

        assert!(!store.update_details(&ids[0], TaskPatch::default(), later));
    }
}
