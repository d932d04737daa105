#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone, Timelike};
    use taskminder::libs::formatter::{format_due, format_minutes, parse_due_date};

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(75), "01:15");
        assert_eq!(format_minutes(600), "10:00");
    }

    #[test]
    fn test_parse_due_date_with_time() {
        let due = parse_due_date("2025-06-02 14:30").unwrap();
        let expected = Local.with_ymd_and_hms(2025, 6, 2, 14, 30, 0).unwrap();
        assert_eq!(due, expected);
        assert_eq!(parse_due_date("2025-06-02T14:30"), Some(due));
        assert_eq!(format_due(&due), "2025-06-02 14:30");
    }

    #[test]
    fn test_parse_due_date_only_is_end_of_day() {
        let due = parse_due_date(" 2025-06-02 ").unwrap().with_timezone(&Local);
        assert_eq!((due.hour(), due.minute()), (23, 59));
    }

    #[test]
    fn test_parse_due_date_rejects_garbage() {
        assert_eq!(parse_due_date("tomorrow"), None);
        assert_eq!(parse_due_date("2025-13-01"), None);
        assert_eq!(parse_due_date(""), None);
    }
}
