#[cfg(test)]
mod tests {
    use taskminder::api::calendar::CalendarConfig;
    use taskminder::db::db::Db;
    use taskminder::db::kv::KvStore;
    use taskminder::db::migrations::{get_db_version, MigrationManager};
    use taskminder::libs::board::ViewMode;
    use taskminder::libs::config::{Config, CONFIG_FILE_NAME};
    use taskminder::libs::data_storage::DataStorage;
    use taskminder::libs::persistence::PersistenceProvider;
    use taskminder::libs::preferences::{PreferenceError, Preferences, Theme, PREFERENCES_KEY};
    use taskminder::libs::task::TaskPriority;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageContext {
        _temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for StorageContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
            let storage = DataStorage::at(temp_dir.path().join("taskminder"));
            StorageContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    #[test_context(StorageContext)]
    #[test]
    fn test_kv_save_load_overwrite(ctx: &mut StorageContext) {
        let mut kv = KvStore::open(&ctx.storage).unwrap();
        assert_eq!(kv.load("missing").unwrap(), None);

        kv.save("greeting", "hello").unwrap();
        assert_eq!(kv.load("greeting").unwrap().as_deref(), Some("hello"));

        kv.save("greeting", "bye").unwrap();
        assert_eq!(kv.load("greeting").unwrap().as_deref(), Some("bye"));
        assert_eq!(kv.keys().unwrap(), vec!["greeting".to_string()]);

        assert!(kv.remove("greeting").unwrap());
        assert!(!kv.remove("greeting").unwrap());
        assert_eq!(kv.load("greeting").unwrap(), None);
    }

    #[test_context(StorageContext)]
    #[test]
    fn test_kv_survives_reopen(ctx: &mut StorageContext) {
        {
            let mut kv = KvStore::open(&ctx.storage).unwrap();
            kv.save("a", "1").unwrap();
        }
        let kv = KvStore::open(&ctx.storage).unwrap();
        assert_eq!(kv.load("a").unwrap().as_deref(), Some("1"));
    }

    #[test_context(StorageContext)]
    #[test]
    fn test_migrations_applied_once(ctx: &mut StorageContext) {
        let latest = MigrationManager::new().latest_version();
        assert_eq!(latest, 1);

        let db = Db::open(&ctx.storage).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), latest);
        drop(db);

        let db = Db::open(&ctx.storage).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), latest);
        let history = MigrationManager::new().get_migration_history(&db.conn).unwrap();
        assert_eq!(history, vec![(1, "create_kv_table".to_string())]);
    }

    #[test]
    fn test_preferences_round_trip() {
        let mut kv = KvStore::in_memory().unwrap();
        assert_eq!(Preferences::load(&kv).unwrap(), Preferences::default());

        let mut prefs = Preferences::default();
        prefs.theme = Theme::Light;
        prefs.default_view = ViewMode::Kanban;
        prefs.focus_mode.pomodoro_duration = 50;
        prefs.save(&mut kv).unwrap();

        assert_eq!(Preferences::load(&kv).unwrap(), prefs);
    }

    #[test]
    fn test_partial_preferences_fill_defaults() {
        let mut kv = KvStore::in_memory().unwrap();
        kv.save(PREFERENCES_KEY, r#"{"theme":"light","focusMode":{"breakDuration":10}}"#)
            .unwrap();

        let prefs = Preferences::load(&kv).unwrap();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.default_task_duration, 30);
        assert_eq!(prefs.default_priority, TaskPriority::Medium);
        assert_eq!(prefs.focus_mode.break_duration, 10);
        assert_eq!(prefs.focus_mode.pomodoro_duration, 25);
        assert!(prefs.enable_time_tracking);
    }

    #[test]
    fn test_preferences_stored_camel_case() {
        let mut kv = KvStore::in_memory().unwrap();
        Preferences::default().save(&mut kv).unwrap();
        let raw = kv.load(PREFERENCES_KEY).unwrap().unwrap();
        assert!(raw.contains("\"defaultTaskDuration\":30"));
        assert!(raw.contains("\"enableTimeTracking\":true"));
    }

    #[test]
    fn test_preference_set() {
        let mut prefs = Preferences::default();
        prefs.set("default_priority", "high").unwrap();
        prefs.set("focus_mode.pomodoro_duration", "45").unwrap();
        prefs.set("notification_channels", "in-app, email,").unwrap();
        assert_eq!(prefs.default_priority, TaskPriority::High);
        assert_eq!(prefs.focus_mode.pomodoro_duration, 45);
        assert_eq!(prefs.notification_channels, vec!["in-app".to_string(), "email".to_string()]);

        assert_eq!(
            prefs.set("volume", "11"),
            Err(PreferenceError::Unknown("volume".into()))
        );
        assert!(matches!(
            prefs.set("default_task_duration", "0"),
            Err(PreferenceError::InvalidValue { .. })
        ));
        assert!(matches!(
            prefs.set("enable_notifications", "maybe"),
            Err(PreferenceError::InvalidValue { .. })
        ));
        assert_eq!(prefs.default_task_duration, 30);
    }

    #[test_context(StorageContext)]
    #[test]
    fn test_config_missing_file_is_default(ctx: &mut StorageContext) {
        assert!(!ctx.storage.base_path().join(CONFIG_FILE_NAME).exists());
        assert_eq!(Config::read_in(&ctx.storage).unwrap(), Config::default());
    }

    #[test_context(StorageContext)]
    #[test]
    fn test_config_round_trip(ctx: &mut StorageContext) {
        let config = Config {
            calendar: Some(CalendarConfig {
                calendar_id: "team".into(),
                access_token: "secret".into(),
                mock: true,
                ..CalendarConfig::default()
            }),
        };
        config.save_in(&ctx.storage).unwrap();
        assert_eq!(Config::read_in(&ctx.storage).unwrap(), config);
    }
}
